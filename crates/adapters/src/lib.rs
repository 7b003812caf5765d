// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external platform services

pub mod fire;
pub mod notify;
pub mod platform;
pub mod scheduler;

pub use fire::{alarm_fired, FireSignal, ALARM_FIRE_CHANNEL};
pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use platform::{NoOpPlatformAdapter, PlatformAdapter, PlatformError};
pub use scheduler::{ExactAlarmScheduler, NoOpScheduler, SchedulerError, TimerScheduler};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use platform::FakePlatformAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use scheduler::{CancelCall, FakeScheduler, ScheduleCall};
