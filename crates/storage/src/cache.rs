// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-slot read-through cache over the alarm store.
//!
//! Memoizes the full record set: the first load reads the store, every
//! later load serves the in-memory snapshot. Writes go to the store first
//! and reach the snapshot only after the store append succeeds. There is
//! no eviction and no internal synchronization: `&mut self` puts call
//! serialization on the caller, matching the cooperative single-threaded
//! execution model.

use crate::store::{AlarmStore, StoreError};
use chime_core::AlarmRecord;

/// Cache slot: either untouched or holding the full record set.
#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Uninitialized,
    Loaded(Vec<AlarmRecord>),
}

impl CacheState {
    fn records(&self) -> &[AlarmRecord] {
        match self {
            CacheState::Uninitialized => &[],
            CacheState::Loaded(records) => records,
        }
    }
}

/// Read-through cache holding the full alarm set in one slot.
pub struct AlarmCache<S> {
    store: S,
    state: CacheState,
}

impl<S: AlarmStore> AlarmCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: CacheState::Uninitialized,
        }
    }

    /// The full record set, read from the store at most once.
    pub async fn load(&mut self) -> Result<&[AlarmRecord], StoreError> {
        self.ensure_loaded().await?;
        Ok(self.state.records())
    }

    /// Persist a record, then mirror it into the snapshot.
    ///
    /// On the first save the snapshot is populated from the store before
    /// the write, so the new record is neither lost nor double-counted by
    /// a later load. A failed append leaves the snapshot untouched.
    pub async fn save(&mut self, record: AlarmRecord) -> Result<(), StoreError> {
        self.ensure_loaded().await?;
        self.store.append(&record).await?;
        if let CacheState::Loaded(records) = &mut self.state {
            records.push(record);
        }
        Ok(())
    }

    /// Number of records in the snapshot.
    ///
    /// A cache-state query, not a store query: it reads 0 until the first
    /// load or save, even when the store already holds records.
    pub fn count(&self) -> usize {
        self.state.records().len()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn ensure_loaded(&mut self) -> Result<(), StoreError> {
        if matches!(self.state, CacheState::Uninitialized) {
            let records = self.store.all().await?;
            self.state = CacheState::Loaded(records);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
