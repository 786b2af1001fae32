//! Board representation and single-step blank moves.
//!
//! A board is an N×N grid of distinct values stored row-major in a flat
//! vector, with 0 marking the blank cell. The goal arrangement is derived
//! from N alone: cells numbered 1..N²-1 row-major, blank last.

use std::fmt;

/// A blank-move direction.
///
/// The discriminant order (right, down, left, up) is the expansion order
/// of the search driver and doubles as the child-slot index on tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Right,
    Down,
    Left,
    Up,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Right, Move::Down, Move::Left, Move::Up];

    /// Child-slot index for this move.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The move name as written to the solution file.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Right => "right",
            Move::Down => "down",
            Move::Left => "left",
            Move::Up => "up",
        }
    }

    /// Row/column delta applied to the blank position.
    fn delta(self) -> (isize, isize) {
        match self {
            Move::Right => (0, 1),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Up => (-1, 0),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An N×N puzzle arrangement with exactly one blank (value 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Creates a board from row-major cells.
    ///
    /// Callers guarantee `cells.len() == size * size`; the parser in
    /// `persistence` validates shape and blank count before reaching here.
    pub fn new(size: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// The goal arrangement for an N×N puzzle: 1..N²-1 row-major, 0 last.
    pub fn goal(size: usize) -> Self {
        let total = size * size;
        let mut cells: Vec<u32> = (1..total as u32).collect();
        cells.push(0);
        Self { size, cells }
    }

    /// Grid dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Position of the blank cell.
    pub fn blank_position(&self) -> (usize, usize) {
        let idx = self
            .cells
            .iter()
            .position(|&v| v == 0)
            .expect("board holds exactly one blank");
        (idx / self.size, idx % self.size)
    }

    /// Sum of per-tile Manhattan distances between this board and `other`.
    ///
    /// The blank does not contribute. Both boards must hold the same value
    /// set for the result to be meaningful.
    pub fn manhattan_distance(&self, other: &Board) -> u32 {
        // value -> flat index in `other`, so each tile is a single lookup
        let mut where_in_other = vec![0usize; self.cells.len()];
        for (idx, &value) in other.cells.iter().enumerate() {
            where_in_other[value as usize] = idx;
        }

        let mut sum = 0u32;
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let target = where_in_other[value as usize];
            let row_gap = (idx / self.size).abs_diff(target / self.size);
            let col_gap = (idx % self.size).abs_diff(target % self.size);
            sum += (row_gap + col_gap) as u32;
        }
        sum
    }

    /// The board after sliding the blank one step in `direction`.
    ///
    /// Returns `None` when the move would take the blank off the grid.
    pub fn shifted(&self, direction: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (row_delta, col_delta) = direction.delta();
        let new_row = row.checked_add_signed(row_delta)?;
        let new_col = col.checked_add_signed(col_delta)?;
        if new_row >= self.size || new_col >= self.size {
            return None;
        }

        let mut shifted = self.clone();
        shifted
            .cells
            .swap(row * self.size + col, new_row * self.size + new_col);
        Some(shifted)
    }
}

impl fmt::Display for Board {
    /// Rows of space-separated values, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3(rows: [[u32; 3]; 3]) -> Board {
        Board::new(3, rows.into_iter().flatten().collect())
    }

    #[test]
    fn test_goal_numbering() {
        let goal = Board::goal(3);
        assert_eq!(goal, board_3x3([[1, 2, 3], [4, 5, 6], [7, 8, 0]]));
    }

    #[test]
    fn test_goal_distance_to_itself_is_zero() {
        for size in 1..=4 {
            let goal = Board::goal(size);
            assert_eq!(goal.manhattan_distance(&goal), 0);
        }
    }

    #[test]
    fn test_manhattan_distance_counts_displaced_tiles() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        // 5 and 8 are each one step from home; the blank is ignored
        assert_eq!(board.manhattan_distance(&Board::goal(3)), 2);
    }

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let b = Board::goal(3);
        assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
    }

    #[test]
    fn test_blank_position() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(board.blank_position(), (1, 1));
    }

    #[test]
    fn test_shifted_swaps_blank_with_neighbor() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);

        let down = board.shifted(Move::Down).unwrap();
        assert_eq!(down, board_3x3([[1, 2, 3], [4, 5, 6], [7, 0, 8]]));

        let right = down.shifted(Move::Right).unwrap();
        assert_eq!(right, Board::goal(3));
    }

    #[test]
    fn test_shifted_rejects_off_grid_moves() {
        let corner = board_3x3([[0, 2, 3], [1, 4, 6], [7, 5, 8]]);
        assert!(corner.shifted(Move::Up).is_none());
        assert!(corner.shifted(Move::Left).is_none());
        assert!(corner.shifted(Move::Right).is_some());
        assert!(corner.shifted(Move::Down).is_some());
    }

    #[test]
    fn test_display_format() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        insta::assert_snapshot!(board.to_string(), @r"
        1 2 3
        4 0 6
        7 5 8
        ");
    }
}
