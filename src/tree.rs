//! Arena-backed search tree.
//!
//! Nodes live in a single `Vec` and refer to each other by index, so the
//! parent back-link and the four named child slots carry no ownership.
//! The tree only grows during a search; every node it has ever created is
//! freed in one piece when the tree is dropped.

use crate::board::{Board, Move};

/// Stable handle to a node in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A single expansion state: a board plus its search links and scores.
///
/// Both scores are computed once at construction and never change. The
/// child slots are populated lazily as expansion proceeds and never
/// cleared; a slot stays `None` when the move is off-grid or its result
/// fails the novelty check.
#[derive(Debug)]
pub struct SearchNode {
    pub board: Board,
    pub parent: Option<NodeId>,
    children: [Option<NodeId>; 4],
    /// Manhattan distance from this board to the goal.
    pub goal_distance: u32,
    /// Goal distance plus Manhattan distance back to the starting board.
    /// This is the a-star sort key; note it is a board displacement, not
    /// the path length from the root.
    pub combined_cost: u32,
}

impl SearchNode {
    /// The child reached by sliding the blank in `direction`, if any.
    pub fn child(&self, direction: Move) -> Option<NodeId> {
        self.children[direction.index()]
    }
}

/// The grow-only tree of all states materialized during one search run.
///
/// The starting board is captured by the root node and serves as the
/// reference point for every `combined_cost` computed afterwards.
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Builds a tree holding only the root node for `start`.
    pub fn new(start: Board, goal: &Board) -> Self {
        let goal_distance = start.manhattan_distance(goal);
        let root = SearchNode {
            board: start,
            parent: None,
            children: [None; 4],
            goal_distance,
            // the root is zero steps displaced from itself
            combined_cost: goal_distance,
        };
        Self { nodes: vec![root] }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrows the node behind `id`.
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Creates a child of `parent` for the board produced by `direction`,
    /// scoring it against the goal and the captured starting board, and
    /// attaches it to the matching child slot.
    pub fn create_child(
        &mut self,
        parent: NodeId,
        direction: Move,
        board: Board,
        goal: &Board,
    ) -> NodeId {
        let goal_distance = board.manhattan_distance(goal);
        let start_distance = board.manhattan_distance(&self.nodes[0].board);
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            board,
            parent: Some(parent),
            children: [None; 4],
            goal_distance,
            combined_cost: goal_distance + start_distance,
        });
        self.nodes[parent.0].children[direction.index()] = Some(id);
        id
    }

    /// Whether `candidate` differs from the board at `from` and from every
    /// board on the ancestor chain up to and including the root.
    ///
    /// This is the cycle guard: linear in the depth of `from`, and blind
    /// to equal states on other branches of the tree.
    pub fn is_novel(&self, from: NodeId, candidate: &Board) -> bool {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            if node.board == *candidate {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.nodes[parent.0].parent;
        }
        depth
    }

    /// The move sequence from the root to `id`, in playing order.
    ///
    /// Each step identifies the move by finding which of the parent's
    /// child slots holds the current node. Slot identity, not board
    /// equality, so two equal-valued siblings could not be confused.
    pub fn path_from_root(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.depth(id));
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            let step = Move::ALL
                .into_iter()
                .find(|&m| self.nodes[parent.0].children[m.index()] == Some(current))
                .expect("child node is linked from its parent");
            moves.push(step);
            current = parent;
        }
        moves.reverse();
        moves
    }
}
