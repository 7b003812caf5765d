use chime_adapters::{ExactAlarmScheduler, FakeNotifyAdapter, TimerScheduler};
use chime_engine::FireListener;
use std::time::Duration;

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn a_due_alarm_reaches_the_notification_surface() {
    let notifier = FakeNotifyAdapter::new();
    let mut listener = FireListener::subscribe(notifier.clone());

    // A past instant is due immediately.
    let scheduler = TimerScheduler::new();
    let due = chrono::Local::now().naive_local() - chrono::Duration::seconds(1);
    scheduler.schedule_exact(due, 41).await.unwrap();

    let relayed = tokio::time::timeout(Duration::from_secs(1), listener.handle_next())
        .await
        .expect("no fire signal arrived");
    assert!(relayed);

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Alarm");
}

#[tokio::test]
#[serial_test::serial(fire_channel)]
async fn a_cancelled_alarm_never_fires() {
    let notifier = FakeNotifyAdapter::new();
    let mut listener = FireListener::subscribe(notifier.clone());

    let scheduler = TimerScheduler::new();
    let soon = chrono::Local::now().naive_local() + chrono::Duration::milliseconds(200);
    scheduler.schedule_exact(soon, 41).await.unwrap();
    scheduler.cancel(41).await.unwrap();

    let fired = tokio::time::timeout(Duration::from_millis(500), listener.handle_next()).await;
    assert!(fired.is_err(), "cancelled alarm fired anyway");
    assert!(notifier.calls().is_empty());
}
