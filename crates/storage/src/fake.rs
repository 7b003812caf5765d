// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake in-memory alarm store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::store::{AlarmStore, StoreError};
use async_trait::async_trait;
use chime_core::AlarmRecord;
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeStoreState {
    records: Vec<AlarmRecord>,
    reads: usize,
    fail_appends: bool,
    fail_reads: bool,
}

/// Fake alarm store for testing.
///
/// Counts full-store reads so tests can assert the cache hits the store at
/// most once, and injects append/read failures on demand. Clones share
/// state.
#[derive(Clone)]
pub struct FakeAlarmStore {
    inner: Arc<Mutex<FakeStoreState>>,
}

impl Default for FakeAlarmStore {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl FakeAlarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with records.
    pub fn with_records(records: Vec<AlarmRecord>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeStoreState {
                records,
                reads: 0,
                fail_appends: false,
                fail_reads: false,
            })),
        }
    }

    /// Number of full-store reads attempted so far.
    pub fn reads(&self) -> usize {
        self.inner.lock().reads
    }

    /// All records currently persisted.
    pub fn records(&self) -> Vec<AlarmRecord> {
        self.inner.lock().records.clone()
    }

    /// Make subsequent appends fail.
    pub fn fail_appends(&self, fail: bool) {
        self.inner.lock().fail_appends = fail;
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.lock().fail_reads = fail;
    }
}

#[async_trait]
impl AlarmStore for FakeAlarmStore {
    async fn append(&self, record: &AlarmRecord) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.fail_appends {
            return Err(StoreError::Backend("append failure injected".to_string()));
        }
        state.records.push(record.clone());
        Ok(())
    }

    async fn all(&self) -> Result<Vec<AlarmRecord>, StoreError> {
        let mut state = self.inner.lock();
        state.reads += 1;
        if state.fail_reads {
            return Err(StoreError::Backend("read failure injected".to_string()));
        }
        Ok(state.records.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
