// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op platform adapter.

use super::{PlatformAdapter, PlatformError};
use async_trait::async_trait;

/// Platform adapter for hosts without a capability surface.
///
/// Reports exact alarms as permitted and treats settings navigation as a
/// successful no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPlatformAdapter;

impl NoOpPlatformAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformAdapter for NoOpPlatformAdapter {
    async fn can_schedule_exact_alarms(&self) -> Result<bool, PlatformError> {
        Ok(true)
    }

    async fn open_exact_alarm_settings(&self) -> Result<(), PlatformError> {
        Ok(())
    }
}
