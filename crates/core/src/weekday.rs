// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical weekday numbering and the day-token table.
//!
//! Alarm records name days by short token ("MON".."SUN"). Scheduling math
//! and identifier packing use the canonical numbers 1 (Monday) through
//! 7 (Sunday), matching chrono's `number_from_monday`. The token table is
//! a fixed constant; tokens outside it resolve to `None` and are skipped
//! by callers.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A day of the week, numbered 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical number: 1 = Monday .. 7 = Sunday.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Resolve a short day token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MON" => Some(Weekday::Monday),
            "TUE" => Some(Weekday::Tuesday),
            "WED" => Some(Weekday::Wednesday),
            "THU" => Some(Weekday::Thursday),
            "FRI" => Some(Weekday::Friday),
            "SAT" => Some(Weekday::Saturday),
            "SUN" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// The short token for this weekday.
    pub fn token(self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
            Weekday::Sunday => "SUN",
        }
    }

    /// Resolve a canonical number. Values outside 1..=7 yield `None`.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod tests;
