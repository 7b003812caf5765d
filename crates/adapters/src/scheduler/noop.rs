// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op scheduler adapter.

use super::{ExactAlarmScheduler, SchedulerError};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Scheduler adapter that silently accepts every request.
///
/// Used when exact alarms are unavailable or not yet configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpScheduler;

impl NoOpScheduler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExactAlarmScheduler for NoOpScheduler {
    async fn schedule_exact(
        &self,
        _fires_at: NaiveDateTime,
        _id: u32,
    ) -> Result<(), SchedulerError> {
        Ok(())
    }

    async fn cancel(&self, _id: u32) -> Result<(), SchedulerError> {
        Ok(())
    }
}
