//! Selected-glyph set management.
//!
//! An empty selection is a meaningful state: it flips the magnification
//! gesture between viewport zoom and selection scale, so emptiness checks go
//! through here rather than ad hoc flags.

use std::collections::HashSet;

/// The set of currently selected glyph ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: HashSet<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Self-inverse.
    pub fn toggle(&mut self, id: u64) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.iter().copied()
    }

    /// Owned copy of the current set, used to freeze gesture targets.
    pub fn snapshot(&self) -> HashSet<u64> {
        self.selected.clone()
    }
}
