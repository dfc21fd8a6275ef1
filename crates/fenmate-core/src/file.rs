//! Board files, a through h.

use std::fmt;

/// A file (column), FileA on the queen's rook side to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    pub const COUNT: usize = 8;

    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// File for a zero-based index (0 = a).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// File for a lowercase letter `'a'..='h'`.
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Lowercase letter used in coordinates.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn index_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_index(file.index() as u8), Some(file));
        }
        assert_eq!(File::from_index(8), None);
    }

    #[test]
    fn chars() {
        assert_eq!(File::from_char('a'), Some(File::FileA));
        assert_eq!(File::from_char('h'), Some(File::FileH));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
        assert_eq!(File::FileC.to_string(), "c");
    }
}
