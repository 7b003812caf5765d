// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::{AlarmId, AlarmRecord, TimeOfDay, Weekday};

/// Build an alarm record with the given id, time, and active days.
pub fn alarm(id: u32, hour: u32, minute: u32, days: &[Weekday]) -> AlarmRecord {
    let mut record = AlarmRecord::new(
        AlarmId::new(id).unwrap(),
        TimeOfDay::new(hour, minute).unwrap(),
    );
    for day in days {
        record = record.with_day(*day, true);
    }
    record
}

/// Build a naive datetime from calendar parts.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
