//! File I/O for loading puzzles and writing solution paths.
//!
//! Input format: plain text, one grid row per line, integers separated by
//! whitespace. The count of values on the first line fixes the grid width
//! N, and the first line is itself row 0; the file must then hold exactly
//! N rows of N values. The literal `-1` is a non-value sentinel and is
//! skipped wherever it appears. 0 marks the blank.
//!
//! Output format: the path length (edge count) on the first line, then
//! one move name per line in root-to-solution order.

use std::fs;
use std::path::Path;

use crate::board::{Board, Move};
use crate::error::{PuzzleError, Result};

/// Reads and parses a puzzle file.
pub fn load_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_board(&text)
}

/// Parses puzzle text into a board.
///
/// Lines that contribute no values (blank lines, lone `-1` sentinels) are
/// skipped without consuming a row. The cells must form a permutation of
/// 0..N²-1.
pub fn parse_board(text: &str) -> Result<Board> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    for line in text.lines() {
        let values = parse_row(line);
        if !values.is_empty() {
            rows.push(values);
        }
    }

    let Some(first) = rows.first() else {
        return Err(PuzzleError::EmptyPuzzle);
    };
    let size = first.len();

    if rows.len() != size {
        return Err(PuzzleError::WrongRowCount {
            found: rows.len(),
            expected: size,
        });
    }

    // N*N cells, each value in 0..N*N and distinct: a permutation with
    // exactly one blank. The search relies on this to index by value.
    let total = size * size;
    let mut cells = Vec::with_capacity(total);
    let mut seen = vec![false; total];
    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(PuzzleError::RaggedRow {
                row: row_index,
                found: row.len(),
                expected: size,
            });
        }
        for &value in row {
            if value < 0 || value >= total as i64 {
                return Err(PuzzleError::InvalidValue {
                    row: row_index,
                    value,
                });
            }
            if seen[value as usize] {
                return Err(PuzzleError::DuplicateValue(value as u32));
            }
            seen[value as usize] = true;
            cells.push(value as u32);
        }
    }

    Ok(Board::new(size, cells))
}

/// Integer tokens of one line, with `-1` sentinels dropped.
fn parse_row(line: &str) -> Vec<i64> {
    line.split_whitespace()
        .filter_map(|token| token.parse::<i64>().ok())
        .filter(|&value| value != -1)
        .collect()
}

/// Writes the solution path to `path`.
pub fn write_moves(path: &Path, moves: &[Move]) -> Result<()> {
    fs::write(path, render_moves(moves)).map_err(|source| PuzzleError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Renders a move sequence in the output file format.
pub fn render_moves(moves: &[Move]) -> String {
    let mut output = format!("{}\n", moves.len());
    for step in moves {
        output.push_str(step.as_str());
        output.push('\n');
    }
    output
}
