use crate::prelude::world;
use chime_adapters::ScheduleCall;
use chime_core::test_support::{alarm, at};
use chime_core::Weekday;

#[tokio::test]
async fn weekly_slots_split_around_the_reference_instant() {
    let w = world();
    // Monday 2024-01-01 08:00: today's 07:30 slot has passed, Wednesday's
    // is still ahead this week.
    w.clock.set(at(2024, 1, 1, 8, 0));
    let record = alarm(5, 7, 30, &[Weekday::Monday, Weekday::Wednesday]);

    let report = w.service.schedule(&record).await;

    assert!(report.is_complete());
    assert_eq!(
        w.scheduler.schedules(),
        vec![
            ScheduleCall {
                fires_at: at(2024, 1, 8, 7, 30),
                id: 41,
            },
            ScheduleCall {
                fires_at: at(2024, 1, 3, 7, 30),
                id: 43,
            },
        ]
    );
}

#[tokio::test]
async fn editing_an_alarm_cancels_exactly_what_was_scheduled() {
    let mut w = world();
    w.clock.set(at(2024, 1, 1, 6, 0));
    let original = alarm(5, 7, 30, &[Weekday::Monday, Weekday::Wednesday]);

    w.service.save_alarm(original.clone()).await.unwrap();
    w.service.schedule(&original).await;
    let armed = w.scheduler.scheduled_ids();

    // The user moves the alarm to 09:00; days are unchanged, so the
    // replacement reuses the identifier set.
    w.service.cancel(&original).await;
    let replacement = alarm(5, 9, 0, &[Weekday::Monday, Weekday::Wednesday]);
    w.service.save_alarm(replacement.clone()).await.unwrap();
    w.service.schedule(&replacement).await;

    assert_eq!(w.scheduler.cancelled_ids(), armed);
    assert_eq!(w.scheduler.scheduled_ids(), [armed.clone(), armed].concat());
}

#[tokio::test]
async fn a_denied_platform_reads_as_unavailable_and_opens_settings() {
    let w = world();
    w.platform.fail_capability(true);

    assert!(!w.service.can_schedule_exact_alarms().await);

    // The app falls back to sending the user to the settings surface;
    // a platform failure there stays invisible too.
    w.platform.fail_settings(true);
    w.service.open_exact_alarm_settings().await;
    assert_eq!(w.platform.settings_opens(), 1);
}

#[tokio::test]
async fn every_weekday_of_one_alarm_gets_a_distinct_identifier() {
    let w = world();
    let record = alarm(123, 7, 0, &Weekday::ALL);

    let report = w.service.schedule(&record).await;

    let mut ids = report.scheduler_ids();
    assert_eq!(ids.len(), 7);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}
