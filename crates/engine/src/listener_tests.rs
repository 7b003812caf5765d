// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chime_adapters::FakeNotifyAdapter;
use std::time::Duration;

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn relays_fire_signals_as_notifications() {
    let notifier = FakeNotifyAdapter::new();
    let mut listener = FireListener::subscribe(notifier.clone());

    fire::alarm_fired();
    assert!(listener.handle_next().await);

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Alarm");
}

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn a_replaced_listener_sees_its_channel_close() {
    let mut first = FireListener::subscribe(FakeNotifyAdapter::new());
    let _second = FireListener::subscribe(FakeNotifyAdapter::new());

    // The second subscription replaced the first listener's sender.
    assert!(!first.handle_next().await);
}

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn run_relays_until_replaced() {
    let notifier = FakeNotifyAdapter::new();
    let listener = FireListener::subscribe(notifier.clone());
    let task = tokio::spawn(listener.run());

    fire::alarm_fired();
    fire::alarm_fired();

    let mut waited = Duration::ZERO;
    while notifier.calls().len() < 2 && waited < Duration::from_secs(1) {
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }
    assert_eq!(notifier.calls().len(), 2);

    // Replacing the subscriber closes the loop's channel and ends run().
    let _replacement = fire::subscribe(ALARM_FIRE_CHANNEL);
    task.await.unwrap();
}
