// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake platform adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PlatformAdapter, PlatformError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

struct FakePlatformState {
    can_schedule: bool,
    fail_capability: bool,
    fail_settings: bool,
    capability_checks: usize,
    settings_opens: usize,
}

/// Fake platform adapter for testing.
///
/// Capability answers and failures are configurable; every request is
/// counted. Clones share state.
#[derive(Clone)]
pub struct FakePlatformAdapter {
    inner: Arc<Mutex<FakePlatformState>>,
}

impl Default for FakePlatformAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePlatformState {
                can_schedule: true,
                fail_capability: false,
                fail_settings: false,
                capability_checks: 0,
                settings_opens: 0,
            })),
        }
    }
}

impl FakePlatformAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capability answer.
    pub fn set_can_schedule(&self, allowed: bool) {
        self.inner.lock().can_schedule = allowed;
    }

    /// Make capability checks fail at the platform level.
    pub fn fail_capability(&self, fail: bool) {
        self.inner.lock().fail_capability = fail;
    }

    /// Make settings navigation fail at the platform level.
    pub fn fail_settings(&self, fail: bool) {
        self.inner.lock().fail_settings = fail;
    }

    /// Number of capability checks received.
    pub fn capability_checks(&self) -> usize {
        self.inner.lock().capability_checks
    }

    /// Number of settings-navigation requests received.
    pub fn settings_opens(&self) -> usize {
        self.inner.lock().settings_opens
    }
}

#[async_trait]
impl PlatformAdapter for FakePlatformAdapter {
    async fn can_schedule_exact_alarms(&self) -> Result<bool, PlatformError> {
        let mut state = self.inner.lock();
        state.capability_checks += 1;
        if state.fail_capability {
            return Err(PlatformError::RequestFailed(
                "capability failure injected".to_string(),
            ));
        }
        Ok(state.can_schedule)
    }

    async fn open_exact_alarm_settings(&self) -> Result<(), PlatformError> {
        let mut state = self.inner.lock();
        state.settings_opens += 1;
        if state.fail_settings {
            return Err(PlatformError::RequestFailed(
                "settings failure injected".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
