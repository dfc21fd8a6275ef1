//! Compile-time check state for the pawn generator.

/// Whether the side to move is in check, fixed at compile time.
pub(crate) trait CheckType {
    const IN_CHECK: bool;
}

/// The king is in check.
pub(crate) struct InCheck;
impl CheckType for InCheck {
    const IN_CHECK: bool = true;
}

/// The king is not in check.
pub(crate) struct NotInCheck;
impl CheckType for NotInCheck {
    const IN_CHECK: bool = false;
}
