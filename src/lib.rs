//! N-puzzle Solver Library
//!
//! Explores the state space of an N×N sliding tile puzzle to find a
//! sequence of blank moves reaching the numbered goal arrangement, using
//! breadth-first, greedy best-first, or a-star frontier ordering.

pub mod board;
pub mod error;
pub mod frontier;
pub mod persistence;
pub mod solver;
pub mod tree;

pub use board::{Board, Move};
pub use error::{PuzzleError, Result};
pub use solver::{solve, Outcome, Strategy};
