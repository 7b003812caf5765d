// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process timer scheduler.
//!
//! Stand-in for the platform alarm service: each schedule call spawns a
//! task that sleeps until the instant and then invokes the process-wide
//! fire callback. Pending tasks are keyed by identifier so cancel and
//! re-schedule behave like the real service. Exactness is only as good as
//! the tokio timer and nothing survives the process, so this adapter
//! serves development and tests, not platform wake guarantees.

use super::{ExactAlarmScheduler, SchedulerError};
use crate::fire;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Timer-backed scheduler keyed by identifier.
#[derive(Clone, Default)]
pub struct TimerScheduler {
    pending: Arc<Mutex<HashMap<u32, JoinHandle<()>>>>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of armed, not-yet-fired one-shots.
    pub fn pending(&self) -> usize {
        let mut pending = self.pending.lock();
        pending.retain(|_, handle| !handle.is_finished());
        pending.len()
    }
}

#[async_trait]
impl ExactAlarmScheduler for TimerScheduler {
    async fn schedule_exact(&self, fires_at: NaiveDateTime, id: u32) -> Result<(), SchedulerError> {
        let now = Local::now().naive_local();
        // Instants already in the past fire immediately.
        let delay = (fires_at - now).to_std().unwrap_or(Duration::ZERO);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(id, "timer alarm fired");
            fire::alarm_fired();
        });
        if let Some(previous) = self.pending.lock().insert(id, handle) {
            previous.abort();
        }
        Ok(())
    }

    async fn cancel(&self, id: u32) -> Result<(), SchedulerError> {
        if let Some(handle) = self.pending.lock().remove(&id) {
            handle.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
