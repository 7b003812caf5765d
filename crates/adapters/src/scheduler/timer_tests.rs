// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fire::ALARM_FIRE_CHANNEL;
use std::time::Duration as StdDuration;

fn far_future() -> NaiveDateTime {
    Local::now().naive_local() + chrono::Duration::hours(1)
}

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn past_instants_fire_immediately() {
    let mut rx = fire::subscribe(ALARM_FIRE_CHANNEL);
    let scheduler = TimerScheduler::new();

    let past = Local::now().naive_local() - chrono::Duration::seconds(5);
    scheduler.schedule_exact(past, 41).await.unwrap();

    let signal = tokio::time::timeout(StdDuration::from_secs(1), rx.recv())
        .await
        .expect("timer did not fire");
    assert_eq!(signal, Some(fire::FireSignal));
}

#[tokio::test]
async fn cancel_disarms_a_pending_alarm() {
    let scheduler = TimerScheduler::new();
    scheduler.schedule_exact(far_future(), 41).await.unwrap();
    assert_eq!(scheduler.pending(), 1);

    scheduler.cancel(41).await.unwrap();
    assert_eq!(scheduler.pending(), 0);
}

#[tokio::test]
async fn cancel_of_an_unknown_id_is_a_no_op() {
    let scheduler = TimerScheduler::new();
    scheduler.cancel(999).await.unwrap();
    assert_eq!(scheduler.pending(), 0);
}

#[tokio::test]
async fn rescheduling_an_id_replaces_the_pending_request() {
    let scheduler = TimerScheduler::new();
    scheduler.schedule_exact(far_future(), 41).await.unwrap();
    scheduler.schedule_exact(far_future(), 41).await.unwrap();
    assert_eq!(scheduler.pending(), 1);
}
