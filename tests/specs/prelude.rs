//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use chime_adapters::{FakePlatformAdapter, FakeScheduler};
use chime_core::FakeClock;
use chime_engine::AlarmService;
use chime_storage::FakeAlarmStore;

pub type FakeService = AlarmService<FakeAlarmStore, FakeScheduler, FakePlatformAdapter, FakeClock>;

/// A scheduling service wired entirely with fakes, plus handles to each
/// fake for assertions.
pub struct World {
    pub service: FakeService,
    pub store: FakeAlarmStore,
    pub scheduler: FakeScheduler,
    pub platform: FakePlatformAdapter,
    pub clock: FakeClock,
}

pub fn world() -> World {
    let store = FakeAlarmStore::new();
    let scheduler = FakeScheduler::new();
    let platform = FakePlatformAdapter::new();
    let clock = FakeClock::new();
    World {
        service: AlarmService::new(
            store.clone(),
            scheduler.clone(),
            platform.clone(),
            clock.clone(),
        ),
        store,
        scheduler,
        platform,
        clock,
    }
}
