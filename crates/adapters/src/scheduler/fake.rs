// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake scheduler adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ExactAlarmScheduler, SchedulerError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Recorded schedule request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCall {
    pub fires_at: NaiveDateTime,
    pub id: u32,
}

/// Recorded cancel request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelCall {
    pub id: u32,
}

struct FakeSchedulerState {
    schedules: Vec<ScheduleCall>,
    cancels: Vec<CancelCall>,
    fail_ids: HashSet<u32>,
}

/// Fake scheduler adapter for testing.
///
/// Records every schedule/cancel request and fails on demand for chosen
/// identifiers. Clones share state.
#[derive(Clone)]
pub struct FakeScheduler {
    inner: Arc<Mutex<FakeSchedulerState>>,
}

impl Default for FakeScheduler {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSchedulerState {
                schedules: Vec::new(),
                cancels: Vec::new(),
                fail_ids: HashSet::new(),
            })),
        }
    }
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make schedule and cancel requests for this identifier fail.
    pub fn fail_id(&self, id: u32) {
        self.inner.lock().fail_ids.insert(id);
    }

    /// All recorded schedule requests.
    pub fn schedules(&self) -> Vec<ScheduleCall> {
        self.inner.lock().schedules.clone()
    }

    /// All recorded cancel requests.
    pub fn cancels(&self) -> Vec<CancelCall> {
        self.inner.lock().cancels.clone()
    }

    /// Identifiers of successful schedule requests, in request order.
    pub fn scheduled_ids(&self) -> Vec<u32> {
        self.inner.lock().schedules.iter().map(|c| c.id).collect()
    }

    /// Identifiers of successful cancel requests, in request order.
    pub fn cancelled_ids(&self) -> Vec<u32> {
        self.inner.lock().cancels.iter().map(|c| c.id).collect()
    }
}

#[async_trait]
impl ExactAlarmScheduler for FakeScheduler {
    async fn schedule_exact(&self, fires_at: NaiveDateTime, id: u32) -> Result<(), SchedulerError> {
        let mut state = self.inner.lock();
        if state.fail_ids.contains(&id) {
            return Err(SchedulerError::ScheduleFailed {
                id,
                message: "failure injected".to_string(),
            });
        }
        state.schedules.push(ScheduleCall { fires_at, id });
        Ok(())
    }

    async fn cancel(&self, id: u32) -> Result<(), SchedulerError> {
        let mut state = self.inner.lock();
        if state.fail_ids.contains(&id) {
            return Err(SchedulerError::CancelFailed {
                id,
                message: "failure injected".to_string(),
            });
        }
        state.cancels.push(CancelCall { id });
        Ok(())
    }
}
