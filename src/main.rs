//! N-puzzle Solver
//!
//! Solves an N×N sliding tile puzzle read from a text file using one of
//! three search strategies (breadth-first, greedy best-first, a-star) and
//! writes the move sequence to an output file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use npuzzle::error::{PuzzleError, Result};
use npuzzle::persistence;
use npuzzle::solver::{self, Outcome, Strategy};

/// Solves a sliding tile puzzle and writes the solution path.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search strategy to order the frontier with.
    #[arg(value_enum)]
    algorithm: Algorithm,
    /// Puzzle file: one grid row per line, 0 for the blank (.txt).
    input: PathBuf,
    /// File the move sequence is written to (.txt).
    output: PathBuf,
}

/// CLI spelling of the search strategies.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Breadth-first search.
    Breadth,
    /// Greedy best-first on the Manhattan heuristic.
    Best,
    /// A-star on heuristic plus start displacement.
    AStar,
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Breadth => Strategy::Breadth,
            Algorithm::Best => Strategy::Best,
            Algorithm::AStar => Strategy::AStar,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    require_txt(&cli.input)?;
    require_txt(&cli.output)?;

    let board = persistence::load_board(&cli.input)?;
    log::debug!("loaded {}x{} puzzle", board.size(), board.size());

    match solver::solve(board, cli.algorithm.into()) {
        Outcome::Solved(moves) => {
            println!("Solved in {} moves", moves.len());
            persistence::write_moves(&cli.output, &moves)
        }
        Outcome::Exhausted => {
            // a clean terminal state, reported without failing the run
            eprintln!("Puzzle has no solution.");
            Ok(())
        }
    }
}

/// Both file arguments must name `.txt` files (case-insensitive).
fn require_txt(path: &Path) -> Result<()> {
    let is_txt = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_txt {
        Ok(())
    } else {
        Err(PuzzleError::BadExtension {
            path: path.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let result = Cli::try_parse_from(["npuzzle", "depth", "in.txt", "out.txt"]);
        assert!(result.is_err(), "only breadth, best and a-star are valid");
    }

    #[test]
    fn test_known_algorithms_parse() {
        for name in ["breadth", "best", "a-star"] {
            let cli = Cli::try_parse_from(["npuzzle", name, "in.txt", "out.txt"]);
            assert!(cli.is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["npuzzle", "breadth", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["npuzzle"]).is_err());
    }

    #[test]
    fn test_require_txt() {
        assert!(require_txt(Path::new("puzzle.txt")).is_ok());
        assert!(require_txt(Path::new("puzzle.TXT")).is_ok());
        assert!(require_txt(Path::new("puzzle.csv")).is_err());
        assert!(require_txt(Path::new("puzzle")).is_err());
    }
}
