//! Error types for the puzzle solver.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run before or outside the search itself.
///
/// A puzzle with no solution is deliberately absent: exhaustion is a
/// normal terminal state of the search, not an error.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A file argument does not carry the required `.txt` extension.
    #[error("{} is not a .txt file", path.display())]
    BadExtension { path: PathBuf },

    /// The input file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file contains no puzzle rows.
    #[error("puzzle file is empty")]
    EmptyPuzzle,

    /// A row does not match the width set by the first line.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// The file holds fewer or more rows than its width.
    #[error("puzzle has {found} rows, expected {expected}")]
    WrongRowCount { found: usize, expected: usize },

    /// A cell value outside 0..N²-1.
    #[error("row {row} holds out-of-range value {value}")]
    InvalidValue { row: usize, value: i64 },

    /// A cell value that appears more than once in the grid.
    #[error("value {0} appears more than once")]
    DuplicateValue(u32),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;
