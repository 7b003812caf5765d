// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn answers_are_configurable_and_counted() {
    let platform = FakePlatformAdapter::new();
    assert!(platform.can_schedule_exact_alarms().await.unwrap());

    platform.set_can_schedule(false);
    assert!(!platform.can_schedule_exact_alarms().await.unwrap());
    assert_eq!(platform.capability_checks(), 2);
}

#[tokio::test]
async fn injected_failures_surface_as_platform_errors() {
    let platform = FakePlatformAdapter::new();
    platform.fail_capability(true);
    platform.fail_settings(true);

    assert!(platform.can_schedule_exact_alarms().await.is_err());
    assert!(platform.open_exact_alarm_settings().await.is_err());
    assert_eq!(platform.capability_checks(), 1);
    assert_eq!(platform.settings_opens(), 1);
}
