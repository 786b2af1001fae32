//! The search driver: expands states until the goal is dequeued or the
//! frontier runs dry.
//!
//! One loop serves all three strategies; only the frontier insertion
//! differs. Expansion always tries the four moves in the fixed order
//! right, down, left, up, so equal-key siblings arrive in a fixed order
//! and the whole run is deterministic.

use crate::board::{Board, Move};
use crate::frontier::Frontier;
use crate::tree::{NodeId, SearchTree};

/// Frontier ordering strategy, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uninformed breadth-first search (FIFO frontier).
    Breadth,
    /// Greedy best-first on the Manhattan goal distance.
    Best,
    /// A-star on the combined cost key.
    AStar,
}

/// Terminal state of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; the moves replay from the start board to the
    /// goal, so the path length is the solution depth.
    Solved(Vec<Move>),
    /// The frontier emptied without reaching the goal. Not an error.
    Exhausted,
}

/// Runs a full search from `start` under the chosen strategy.
///
/// The goal arrangement is derived from the board size. The search holds
/// the entire expansion tree in memory for the duration of the run; the
/// only cycle guard is the ancestor-chain check, so adversarial inputs on
/// large boards can grow without bound.
pub fn solve(start: Board, strategy: Strategy) -> Outcome {
    let goal = Board::goal(start.size());
    let mut tree = SearchTree::new(start, &goal);
    let mut frontier = Frontier::new();
    enqueue(&mut frontier, &tree, tree.root(), strategy);

    while !frontier.is_empty() {
        let Some(current) = frontier.dequeue() else {
            break;
        };

        if tree.node(current).board == goal {
            log::debug!(
                "solved at depth {} after materializing {} nodes",
                tree.depth(current),
                tree.len()
            );
            return Outcome::Solved(tree.path_from_root(current));
        }

        expand(&mut tree, &mut frontier, current, &goal, strategy);
    }

    log::debug!("frontier exhausted after {} nodes", tree.len());
    Outcome::Exhausted
}

/// Tries all four blank moves from `current`, keeping those that stay on
/// the grid and pass the novelty filter.
fn expand(
    tree: &mut SearchTree,
    frontier: &mut Frontier,
    current: NodeId,
    goal: &Board,
    strategy: Strategy,
) {
    for direction in Move::ALL {
        let Some(candidate) = tree.node(current).board.shifted(direction) else {
            continue;
        };
        if !tree.is_novel(current, &candidate) {
            continue;
        }
        let child = tree.create_child(current, direction, candidate, goal);
        enqueue(frontier, tree, child, strategy);
    }
}

/// Inserts `node` with the comparator in force for the run.
fn enqueue(frontier: &mut Frontier, tree: &SearchTree, node: NodeId, strategy: Strategy) {
    match strategy {
        Strategy::Breadth => frontier.enqueue_fifo(node),
        Strategy::Best => frontier.enqueue_by_heuristic(node, tree),
        Strategy::AStar => frontier.enqueue_by_combined_cost(node, tree),
    }
}
