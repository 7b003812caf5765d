use chime_adapters::{NoOpPlatformAdapter, NoOpScheduler};
use chime_core::test_support::alarm;
use chime_core::{SystemClock, Weekday};
use chime_engine::AlarmService;
use chime_storage::JsonlAlarmStore;
use std::path::Path;

type JsonlService = AlarmService<JsonlAlarmStore, NoOpScheduler, NoOpPlatformAdapter, SystemClock>;

fn open_service(dir: &Path) -> JsonlService {
    let store = JsonlAlarmStore::open(dir, "alarms").unwrap();
    AlarmService::new(store, NoOpScheduler::new(), NoOpPlatformAdapter::new(), SystemClock::new())
}

#[tokio::test]
async fn saved_alarms_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let first = alarm(1, 7, 30, &[Weekday::Monday]);
    let second = alarm(2, 21, 0, &[Weekday::Friday, Weekday::Saturday]);

    {
        let mut service = open_service(dir.path());
        service.save_alarm(first.clone()).await.unwrap();
        service.save_alarm(second.clone()).await.unwrap();
    }

    let mut reopened = open_service(dir.path());
    assert_eq!(reopened.alarm_count(), 0);
    assert_eq!(
        reopened.load_alarms().await.unwrap(),
        &[first, second]
    );
    assert_eq!(reopened.alarm_count(), 2);
}

#[tokio::test]
async fn count_tracks_each_save_within_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = open_service(dir.path());

    assert_eq!(service.alarm_count(), 0);
    service
        .save_alarm(alarm(1, 6, 0, &[Weekday::Sunday]))
        .await
        .unwrap();
    assert_eq!(service.alarm_count(), 1);
    service
        .save_alarm(alarm(2, 6, 30, &[Weekday::Sunday]))
        .await
        .unwrap();
    assert_eq!(service.alarm_count(), 2);
}
