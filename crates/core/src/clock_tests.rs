// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::weekday::Weekday;

#[test]
fn fake_clock_starts_on_a_monday_at_midnight() {
    let clock = FakeClock::new();
    let now = clock.now();
    assert_eq!(Weekday::from_date(now.date()), Weekday::Monday);
    assert_eq!(now.time(), NaiveTime::MIN);
}

#[test]
fn fake_clock_set_and_advance() {
    let clock = FakeClock::new();
    let start = clock.now();

    clock.advance(Duration::minutes(90));
    assert_eq!(clock.now(), start + Duration::minutes(90));

    let later = start + Duration::days(2);
    clock.set(later);
    assert_eq!(clock.now(), later);
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let other = clock.clone();

    clock.advance(Duration::hours(1));
    assert_eq!(other.now(), clock.now());
}
