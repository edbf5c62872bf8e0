//! Per-run identity tracking for flyweight declarations.

use std::collections::HashSet;
use std::hash::Hash;

/// Handles already processed during one enricher run.
///
/// A declaration attached under several parents is reached once per parent;
/// enrichers consult this set so each instance is enriched at most once.
#[derive(Debug)]
pub struct Processed<T> {
    seen: HashSet<T>,
}

impl<T: Copy + Eq + Hash> Processed<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Records a visit. Returns true the first time a handle is seen.
    pub fn first_visit(&mut self, id: T) -> bool {
        self.seen.insert(id)
    }

    /// Returns true if the handle was already visited.
    #[must_use]
    pub fn contains(&self, id: T) -> bool {
        self.seen.contains(&id)
    }

    /// Number of distinct handles visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing was visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<T: Copy + Eq + Hash> Default for Processed<T> {
    fn default() -> Self {
        Self::new()
    }
}
