// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm scheduling orchestration.
//!
//! For each active weekday of an alarm the service computes the next
//! occurrence, packs the scheduler identifier, and issues one request to
//! the external exact-alarm service. It also owns the record cache and the
//! platform capability operations. Weekday requests are independent: one
//! day failing never stops the rest, and every attempt lands in the
//! returned report.

use chime_adapters::{ExactAlarmScheduler, PlatformAdapter, SchedulerError};
use chime_core::{next_occurrence, sched_id, AlarmRecord, Clock, Weekday};
use chime_storage::{AlarmCache, AlarmStore};
use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::ServiceError;

/// Outcome of one schedule or cancel request for a single weekday.
#[derive(Debug)]
pub struct DayOutcome {
    pub weekday: Weekday,
    pub scheduler_id: u32,
    /// Computed fire instant; `None` for cancel requests, which only need
    /// the identifier.
    pub fires_at: Option<NaiveDateTime>,
    pub error: Option<SchedulerError>,
}

impl DayOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-weekday outcomes of one schedule or cancel call.
#[derive(Debug, Default)]
pub struct ScheduleReport {
    pub outcomes: Vec<DayOutcome>,
}

impl ScheduleReport {
    /// True when every attempted weekday succeeded. An empty report is
    /// complete: an alarm with no active days has nothing to arm.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(DayOutcome::is_ok)
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &DayOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_ok())
    }

    /// Scheduler identifiers of every attempted weekday, in request order.
    pub fn scheduler_ids(&self) -> Vec<u32> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.scheduler_id)
            .collect()
    }
}

/// Orchestrates recurrence math, identifier packing, persistence, and the
/// external alarm service.
pub struct AlarmService<S, E, P, C> {
    cache: AlarmCache<S>,
    scheduler: E,
    platform: P,
    clock: C,
}

impl<S, E, P, C> AlarmService<S, E, P, C>
where
    S: AlarmStore,
    E: ExactAlarmScheduler,
    P: PlatformAdapter,
    C: Clock,
{
    pub fn new(store: S, scheduler: E, platform: P, clock: C) -> Self {
        Self {
            cache: AlarmCache::new(store),
            scheduler,
            platform,
            clock,
        }
    }

    /// Arm one exact one-shot per active weekday of `alarm`.
    ///
    /// Day tokens outside the canonical table were already dropped during
    /// resolution. A failed day is logged, recorded in the report, and the
    /// loop moves on to the next day.
    pub async fn schedule(&self, alarm: &AlarmRecord) -> ScheduleReport {
        let now = self.clock.now();
        let mut report = ScheduleReport::default();
        for weekday in alarm.active_weekdays() {
            let fires_at = next_occurrence(alarm.time, weekday, now);
            let id = sched_id::encode(alarm.id, weekday);
            let error = match self.scheduler.schedule_exact(fires_at, id).await {
                Ok(()) => None,
                Err(e) => {
                    warn!(alarm = %alarm.id, %weekday, id, error = %e, "scheduling weekday failed");
                    Some(e)
                }
            };
            report.outcomes.push(DayOutcome {
                weekday,
                scheduler_id: id,
                fires_at: Some(fires_at),
                error,
            });
        }
        report
    }

    /// Disarm every active weekday of `alarm`.
    ///
    /// Recomputes the identifier set from the record (occurrence instants
    /// are irrelevant for cancellation) and issues one cancel per day with
    /// the same per-day isolation as [`AlarmService::schedule`].
    pub async fn cancel(&self, alarm: &AlarmRecord) -> ScheduleReport {
        let mut report = ScheduleReport::default();
        for weekday in alarm.active_weekdays() {
            let id = sched_id::encode(alarm.id, weekday);
            let error = match self.scheduler.cancel(id).await {
                Ok(()) => None,
                Err(e) => {
                    warn!(alarm = %alarm.id, %weekday, id, error = %e, "cancelling weekday failed");
                    Some(e)
                }
            };
            report.outcomes.push(DayOutcome {
                weekday,
                scheduler_id: id,
                fires_at: None,
                error,
            });
        }
        report
    }

    /// Persist an alarm definition, write-through to the cache snapshot.
    pub async fn save_alarm(&mut self, record: AlarmRecord) -> Result<(), ServiceError> {
        self.cache.save(record).await?;
        Ok(())
    }

    /// All persisted alarms, read from the store at most once.
    pub async fn load_alarms(&mut self) -> Result<&[AlarmRecord], ServiceError> {
        Ok(self.cache.load().await?)
    }

    /// Number of cached alarms: 0 before the first load or save.
    pub fn alarm_count(&self) -> usize {
        self.cache.count()
    }

    /// Whether the platform permits exact alarms.
    ///
    /// Platform-level failure degrades to `false` and is never propagated.
    pub async fn can_schedule_exact_alarms(&self) -> bool {
        match self.platform.can_schedule_exact_alarms().await {
            Ok(allowed) => allowed,
            Err(e) => {
                warn!(error = %e, "exact-alarm capability check failed");
                false
            }
        }
    }

    /// Best-effort navigation to the exact-alarm settings surface.
    /// Failures are logged, not surfaced.
    pub async fn open_exact_alarm_settings(&self) {
        if let Err(e) = self.platform.open_exact_alarm_settings().await {
            warn!(error = %e, "opening exact-alarm settings failed");
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
