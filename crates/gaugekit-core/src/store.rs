//! Label-tuple keyed cell store backed by `DashMap`.
//!
//! The map only grows: a cell is created the first time its tuple is seen and
//! is never removed, so every lookup of the same tuple returns the same cell.

use std::sync::Arc;

use dashmap::DashMap;

use crate::field::Fields;

pub struct CellStore<F, C> {
    cells: DashMap<F, Arc<C>>,
}

impl<F: Fields, C: Default> CellStore<F, C> {
    pub fn new() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }

    /// Return the cell for `labels`, creating a zeroed one if absent.
    ///
    /// Existing cells are found under a shard read lock; only an unseen tuple
    /// takes the write path.
    pub fn get_or_create(&self, labels: F) -> Arc<C> {
        if let Some(cell) = self.cells.get(&labels) {
            return Arc::clone(cell.value());
        }
        let cell = self.cells.entry(labels).or_insert_with(|| {
            tracing::trace!("materialized new cell");
            Arc::new(C::default())
        });
        Arc::clone(cell.value())
    }

    /// Lookup without creating.
    pub fn get(&self, labels: &F) -> Option<Arc<C>> {
        self.cells.get(labels).map(|r| Arc::clone(r.value()))
    }

    /// Visit every materialized `(cell, labels)` pair.
    ///
    /// Handles are copied out first and the shard locks dropped, so the
    /// visitor may call back into the store.
    pub fn for_each(&self, mut visit: impl FnMut(&C, &F)) {
        let entries: Vec<(F, Arc<C>)> = self
            .cells
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();
        for (labels, cell) in &entries {
            visit(cell, labels);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<F: Fields, C: Default> Default for CellStore<F, C> {
    fn default() -> Self {
        Self::new()
    }
}
