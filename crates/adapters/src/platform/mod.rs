// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform capability adapters.
//!
//! Two request/response operations against the host platform: query
//! whether exact alarms may be scheduled, and navigate the user to the
//! exact-alarm settings surface. Both fail on some platforms as a matter
//! of course; callers treat failure as "unavailable" rather than an
//! error.

mod noop;

pub use noop::NoOpPlatformAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePlatformAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from platform capability operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform request failed: {0}")]
    RequestFailed(String),
}

/// Adapter for host-platform capability requests.
#[async_trait]
pub trait PlatformAdapter: Clone + Send + Sync + 'static {
    /// Whether the platform currently permits scheduling exact alarms.
    async fn can_schedule_exact_alarms(&self) -> Result<bool, PlatformError>;

    /// Ask the platform to open its exact-alarm settings surface.
    async fn open_exact_alarm_settings(&self) -> Result<(), PlatformError>;
}
