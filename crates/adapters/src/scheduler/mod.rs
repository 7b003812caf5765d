// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exact-alarm scheduler adapters.
//!
//! The platform alarm service arms exact, wake-capable one-shots keyed by
//! a packed scheduler identifier and invokes the process-wide fire
//! callback when one goes off. Accuracy and wake guarantees belong to the
//! platform; these adapters only carry the requests.

mod noop;
mod timer;

pub use noop::NoOpScheduler;
pub use timer::TimerScheduler;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CancelCall, FakeScheduler, ScheduleCall};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors from scheduler operations
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("schedule failed for id {id}: {message}")]
    ScheduleFailed { id: u32, message: String },
    #[error("cancel failed for id {id}: {message}")]
    CancelFailed { id: u32, message: String },
}

/// Adapter for the platform's exact-alarm service.
///
/// `schedule_exact` arms a one-shot, wake-capable alarm at the given local
/// wall-clock instant under the given identifier; the service invokes the
/// fixed fire callback (`crate::fire::alarm_fired`) when it goes off.
/// Re-scheduling an identifier replaces the pending request. `cancel`
/// disarms by identifier and is a no-op for identifiers that are not
/// armed.
#[async_trait]
pub trait ExactAlarmScheduler: Clone + Send + Sync + 'static {
    /// Arm a one-shot exact alarm.
    async fn schedule_exact(&self, fires_at: NaiveDateTime, id: u32) -> Result<(), SchedulerError>;

    /// Disarm a pending alarm by identifier.
    async fn cancel(&self, id: u32) -> Result<(), SchedulerError>;
}
