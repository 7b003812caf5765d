// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Next-occurrence computation for weekly recurrences.
//!
//! Pure local wall-clock arithmetic: given a time of day, a target weekday,
//! and a reference instant, produce the next instant at that time on that
//! weekday. No I/O and no error conditions.

use crate::alarm::TimeOfDay;
use crate::weekday::Weekday;
use chrono::{Duration, NaiveDateTime};

/// Next instant at `time` on `target`, at or after `now`.
///
/// The candidate is built on `now`'s calendar date. When the target day is
/// today, a candidate that has already passed rolls a full week ahead,
/// while a candidate at or after `now` fires today (possibly exactly at
/// `now`). Any other target day advances by its forward distance, always
/// 1..=6 days.
pub fn next_occurrence(time: TimeOfDay, target: Weekday, now: NaiveDateTime) -> NaiveDateTime {
    let candidate = NaiveDateTime::new(now.date(), time.as_naive());
    let today = Weekday::from_date(now.date());
    // rem_euclid lands in [0, 6] even when the target is earlier in the week.
    let days_ahead =
        (i64::from(target.number()) - i64::from(today.number())).rem_euclid(7);

    if days_ahead == 0 {
        if candidate < now {
            // Today's slot already passed; roll to next week.
            candidate + Duration::days(7)
        } else {
            candidate
        }
    } else {
        candidate + Duration::days(days_ahead)
    }
}

#[cfg(test)]
#[path = "recurrence_tests.rs"]
mod tests;
