//! Search-tree nodes and the arena that owns them.
//!
//! Parents are referenced by [`NodeId`] handles into a [`SearchTree`], so a
//! node never owns its ancestors and the tree cannot form cycles.

use crate::puzzle::{Board, Move};

/// Handle of a node inside the [`SearchTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An immutable state in the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// The slide that produced this board from its parent.
    pub mv: Option<Move>,
    /// Moves taken from the root.
    pub g: u32,
    /// Manhattan estimate of moves remaining, computed once at construction.
    pub h: u32,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        let h = board.heuristic();
        Self {
            board,
            parent: None,
            mv: None,
            g: 0,
            h,
        }
    }

    pub fn child(board: Board, parent_id: NodeId, parent: &SearchNode, mv: Move) -> Self {
        let h = board.heuristic();
        Self {
            board,
            parent: Some(parent_id),
            mv: Some(mv),
            g: parent.g + 1,
            h,
        }
    }

    /// Frontier priority, `g + h`.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_goal()
    }

    pub fn legal_moves(&self) -> Vec<(Move, Board)> {
        self.board.legal_moves()
    }
}

/// Append-only arena of every node generated during one search.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from the root down to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<&SearchNode> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node);
            current = node.parent;
        }
        path.reverse();
        path
    }
}
