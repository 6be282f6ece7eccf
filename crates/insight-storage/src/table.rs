use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use insight_core::error::InsightError;

/// Rows of one entity kind keyed by id, with the next id to hand out.
///
/// Ids start at 1 and only ever grow, so iterating the map yields rows in
/// insertion order.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocate the next id, build the row from it and store it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub(crate) fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<T> {
        self.rows.remove(&id)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Drop every row matching `pred`, returning the number removed.
    pub(crate) fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !pred(row));
        before - self.rows.len()
    }

    /// Drop every row. The id counter is kept.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Lock a table, mapping a poisoned mutex to a storage error.
pub(crate) fn lock<'a, T>(
    table: &'a Mutex<Table<T>>,
    name: &str,
) -> Result<MutexGuard<'a, Table<T>>, InsightError> {
    table
        .lock()
        .map_err(|e| InsightError::Storage(format!("{} table lock poisoned: {}", name, e)))
}
