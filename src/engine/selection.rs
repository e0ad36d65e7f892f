//! Selected product identifiers.
//!
//! Whether "everything is selected" is derived from the set and the currently visible
//! ids on every call, so it can never go stale after a single item is deselected.

use std::collections::BTreeSet;

use crate::model::ProductId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle_one(&mut self, id: ProductId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Clears the set if every visible id is selected, otherwise selects exactly `visible`.
    pub fn toggle_all(&mut self, visible: &[ProductId]) {
        if self.is_all_selected(visible) {
            self.selected.clear();
        } else {
            self.selected = visible.iter().copied().collect();
        }
    }

    /// `true` when the set is exactly the (non-empty) visible set.
    pub fn is_all_selected(&self, visible: &[ProductId]) -> bool {
        !visible.is_empty()
            && self.selected.len() == visible.len()
            && visible.iter().all(|id| self.selected.contains(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.selected.contains(&id)
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        self.selected.remove(&id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
