//! Sliding-tile puzzle generator and best-first solver.
//!
//! - [`Board`]: immutable N×N grid with move generation and Manhattan heuristic
//! - [`SearchNode`] / [`SearchTree`]: arena of search states linked by [`NodeId`]
//! - [`Frontier`]: lowest `f` first, newest first on ties
//! - [`VisitedSet`]: board keys already queued
//! - [`SearchEngine`]: the select/expand loop
//! - [`shuffle()`]: random walk from the goal, for solvable starting boards

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod puzzle;
pub mod render;
pub mod search;
pub mod shuffle;
pub mod visited;

pub use error::MalformedBoardError;
pub use frontier::{Frontier, FrontierKey};
pub use node::{NodeId, SearchNode, SearchTree};
pub use puzzle::{Board, BoardKey, Move};
pub use search::{resolve, Revisit, SearchConfig, SearchEngine, SearchState, SearchStats, Solution};
pub use shuffle::{shuffle, DEFAULT_SHUFFLE_STEPS};
pub use visited::VisitedSet;
