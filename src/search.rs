//! Best-first search entry point and expansion loop.

use std::fmt;

use log::{debug, trace};

use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode, SearchTree};
use crate::puzzle::{Board, Move};
use crate::visited::VisitedSet;

/// What happens when a search rediscovers a board it has already queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Revisit {
    /// The first route found to a board is final. Paths may be longer than
    /// necessary, but expansion order matches the classic re-sorted queue.
    #[default]
    Never,
    /// Requeue a board when it is reached with a strictly lower `g`.
    /// With the Manhattan heuristic this yields shortest paths.
    OnImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub revisit: Revisit,
}

impl SearchConfig {
    /// Configuration that returns shortest solutions.
    pub fn optimal() -> Self {
        Self {
            revisit: Revisit::OnImprovement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search has run yet.
    #[default]
    Idle,
    Running,
    Solved,
    Exhausted,
}

/// Counters collected over one `resolve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pop excluded).
    pub expanded: u64,
    /// Successor boards produced by move generation.
    pub generated: u64,
    /// Successors dropped because their board was already queued.
    pub duplicates: u64,
    /// Boards requeued with a lower `g`.
    pub reopened: u64,
    /// Outdated frontier entries discarded on pop.
    pub stale: u64,
    /// Distinct boards seen.
    pub visited: usize,
    pub frontier_high_water: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded {} generated {} duplicates {} reopened {} stale {} visited {} frontier peak {}",
            self.expanded,
            self.generated,
            self.duplicates,
            self.reopened,
            self.stale,
            self.visited,
            self.frontier_high_water
        )
    }
}

/// A path from the initial board to the goal, root first.
///
/// Nodes are detached copies; their `parent` handles refer to the search
/// tree that produced them, which is dropped when `resolve` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<SearchNode>,
}

impl Solution {
    /// Move tags in order, root excluded.
    pub fn moves(&self) -> Vec<Move> {
        self.path.iter().filter_map(|node| node.mv).collect()
    }

    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn initial_board(&self) -> Option<&Board> {
        self.path.first().map(|node| &node.board)
    }

    pub fn final_board(&self) -> Option<&Board> {
        self.path.last().map(|node| &node.board)
    }
}

/// Drives the select/expand loop over a [`Frontier`] and [`VisitedSet`].
///
/// The engine is deterministic: the same board and config always produce
/// the same path.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    state: SearchState,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Counters from the most recent `resolve`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for a path from `initial` to the goal board.
    ///
    /// Returns `None` once every reachable board has been expanded without
    /// meeting the goal.
    pub fn resolve(&mut self, initial: &Board) -> Option<Solution> {
        self.state = SearchState::Running;
        self.stats = SearchStats::default();

        let mut tree = SearchTree::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();

        let root = SearchNode::root(initial.clone());
        debug!(
            "search start: {0}x{0} board, h = {1}, revisit {2:?}",
            initial.size(),
            root.h,
            self.config.revisit
        );
        visited.add(initial.key(), 0);
        let f = root.f();
        let root_id = tree.insert(root);
        frontier.insert_front(root_id, f);

        let goal = loop {
            let Some(id) = frontier.pop_best() else {
                break None;
            };

            let node = tree.get(id);
            if self.config.revisit == Revisit::OnImprovement
                && visited
                    .best_cost(&node.board.key())
                    .is_some_and(|best| best < node.g)
            {
                self.stats.stale += 1;
                continue;
            }

            if node.is_goal() {
                break Some(id);
            }

            self.stats.expanded += 1;
            trace!("expand g = {} h = {} [{}]", node.g, node.h, node.board.key());
            self.expand(id, &mut tree, &mut frontier, &mut visited);
        };

        self.stats.visited = visited.len();
        self.stats.frontier_high_water = frontier.high_water();

        match goal {
            Some(id) => {
                self.state = SearchState::Solved;
                let path: Vec<SearchNode> = tree.path(id).into_iter().cloned().collect();
                debug!("solved in {} moves: {}", path.len() - 1, self.stats);
                Some(Solution { path })
            }
            None => {
                self.state = SearchState::Exhausted;
                debug!("search space exhausted: {}", self.stats);
                None
            }
        }
    }

    fn expand(
        &mut self,
        id: NodeId,
        tree: &mut SearchTree,
        frontier: &mut Frontier,
        visited: &mut VisitedSet,
    ) {
        let parent = tree.get(id);
        let g = parent.g + 1;

        for (mv, board) in parent.legal_moves() {
            self.stats.generated += 1;

            let key = board.key();
            let queued = match self.config.revisit {
                Revisit::Never => visited.add(key, g),
                Revisit::OnImprovement => {
                    let known = visited.contains(&key);
                    let improved = visited.improve(key, g);
                    if known && improved {
                        self.stats.reopened += 1;
                    }
                    improved
                }
            };
            if !queued {
                self.stats.duplicates += 1;
                continue;
            }

            let child = SearchNode::child(board, id, tree.get(id), mv);
            let f = child.f();
            let child_id = tree.insert(child);
            frontier.insert_front(child_id, f);
        }
    }
}

/// Run a default-configured search.
pub fn resolve(initial: &Board) -> Option<Solution> {
    SearchEngine::default().resolve(initial)
}
