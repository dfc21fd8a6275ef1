use std::time::Instant;

use anyhow::{Context, Result};
use fenmate_core::{Position, divide, generate_legal_moves, parse_fen};
use tracing::{debug, info};

/// Example position shown when no FEN is given: White has just been fool's-mated.
const DEFAULT_FEN: &str = "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

const USAGE: &str = "usage: fenmate [--perft <depth>] [FEN...]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Report { fen: String },
    Perft { depth: usize, fen: String },
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut args = args.into_iter().peekable();
    let first = args.peek().cloned();

    let depth = match first.as_deref() {
        Some("-h" | "--help") => return Ok(Command::Help),
        Some("--perft") => {
            args.next();
            let text = args.next().ok_or("--perft needs a depth")?;
            let depth = text
                .parse::<usize>()
                .map_err(|_| format!("invalid perft depth: \"{text}\""))?;
            Some(depth)
        }
        Some(flag) if flag.starts_with("--") => return Err(format!("unknown option: {flag}")),
        _ => None,
    };

    // A FEN may arrive as one quoted argument or as its six fields.
    let rest: Vec<String> = args.collect();
    let fen = if rest.is_empty() { DEFAULT_FEN.to_string() } else { rest.join(" ") };

    Ok(match depth {
        Some(depth) => Command::Perft { depth, fen },
        None => Command::Report { fen },
    })
}

fn report(pos: &Position) {
    let state = pos.game_state();
    let mut moves = generate_legal_moves(pos);
    moves.sort();
    let text: Vec<String> = moves.iter().map(|mv| mv.to_uci()).collect();

    println!("{pos}");
    println!("{}", pos.pretty());
    println!("in check: {}", state.in_check);
    println!("legal moves ({}): {}", moves.len(), text.join(" "));
    if state.status.is_terminal() {
        println!("{} in {}", state.side_to_move.name(), state.status);
    }
}

fn run_perft(pos: &Position, depth: usize) {
    let start = Instant::now();
    let results = divide(pos, depth);
    let nodes: u64 = results.iter().map(|(_, count)| count).sum();
    for (mv, count) in &results {
        println!("{mv}: {count}");
    }
    println!();
    println!("nodes: {nodes}");
    info!(depth, nodes, elapsed = ?start.elapsed(), "perft finished");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("fenmate: {message}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    debug!(?command, "parsed arguments");

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Report { fen } => {
            let pos = parse_fen(&fen).with_context(|| format!("invalid FEN: \"{fen}\""))?;
            info!(fen = %pos, "analysing position");
            report(&pos);
        }
        Command::Perft { depth, fen } => {
            let pos = parse_fen(&fen).with_context(|| format!("invalid FEN: \"{fen}\""))?;
            info!(fen = %pos, depth, "running perft");
            run_perft(&pos, depth);
        }
    }

    Ok(())
}
