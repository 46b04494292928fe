use std::collections::HashMap;

use crate::puzzle::BoardKey;

/// Board keys already placed on the frontier, with the lowest `g` recorded
/// for each.
#[derive(Debug, Default)]
pub struct VisitedSet {
    best_g: HashMap<BoardKey, u32>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &BoardKey) -> bool {
        self.best_g.contains_key(key)
    }

    /// Record `key`. Returns `false` if it was already present.
    pub fn add(&mut self, key: BoardKey, g: u32) -> bool {
        if self.best_g.contains_key(&key) {
            return false;
        }
        self.best_g.insert(key, g);
        true
    }

    /// Record `key` if it is new or `g` beats the stored cost.
    pub fn improve(&mut self, key: BoardKey, g: u32) -> bool {
        match self.best_g.get_mut(&key) {
            Some(best) if *best <= g => false,
            Some(best) => {
                *best = g;
                true
            }
            None => {
                self.best_g.insert(key, g);
                true
            }
        }
    }

    pub fn best_cost(&self, key: &BoardKey) -> Option<u32> {
        self.best_g.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.best_g.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_g.is_empty()
    }
}
