// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm records: identity, fire time, and the active-day map.
//!
//! Records are immutable in shape: an update is modeled as saving a
//! replacement record, never as mutation in place.

use crate::weekday::Weekday;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors constructing an [`AlarmId`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlarmIdError {
    #[error("alarm id {0} does not fit in {bits} bits", bits = AlarmId::BITS)]
    OutOfRange(u32),
}

/// Alarm identity, assigned at creation and stable for the alarm's
/// lifetime.
///
/// Bounded below 2^28 at construction so that identifier packing (see
/// [`crate::sched_id`]) never truncates: the scheduled and cancelled
/// identifiers for one (alarm, weekday) pair always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlarmId(u32);

impl AlarmId {
    /// Identity bits carried into packed scheduler identifiers.
    pub const BITS: u32 = 28;

    /// Largest valid alarm id.
    pub const MAX: u32 = (1 << Self::BITS) - 1;

    /// Create an alarm id, rejecting values outside the 28-bit space.
    pub fn new(raw: u32) -> Result<Self, AlarmIdError> {
        if raw > Self::MAX {
            return Err(AlarmIdError::OutOfRange(raw));
        }
        Ok(Self(raw))
    }

    /// The raw identity value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AlarmId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for AlarmId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        AlarmId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Errors constructing a [`TimeOfDay`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    Invalid { hour: u32, minute: u32 },
    #[error("malformed time of day: {0:?}")]
    Malformed(String),
}

/// A wall-clock time of day (hour and minute). No date or zone attached.
///
/// Serialized as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time of day, rejecting out-of-range hours or minutes.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeOfDayError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(TimeOfDayError::Invalid { hour, minute })
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub(crate) fn as_naive(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeOfDayError::Malformed(s.to_string()))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| TimeOfDayError::Malformed(s.to_string()))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| TimeOfDayError::Malformed(s.to_string()))?;
        TimeOfDay::new(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One alarm definition: identity, fire time, and per-day active flags.
///
/// `days` maps short day tokens ("MON".."SUN") to an active flag. An
/// absent token counts as inactive. Tokens outside the canonical table are
/// tolerated and skipped during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRecord {
    pub id: AlarmId,
    pub time: TimeOfDay,
    #[serde(default)]
    pub days: BTreeMap<String, bool>,
}

impl AlarmRecord {
    /// Create a record with no active days.
    pub fn new(id: AlarmId, time: TimeOfDay) -> Self {
        Self {
            id,
            time,
            days: BTreeMap::new(),
        }
    }

    /// Set the active flag for one weekday.
    pub fn with_day(mut self, weekday: Weekday, active: bool) -> Self {
        self.days.insert(weekday.token().to_string(), active);
        self
    }

    /// Active weekdays in canonical order (Monday first).
    ///
    /// Tokens absent from the canonical table are skipped; an alarm with no
    /// active days resolves to an empty set and schedules nothing.
    pub fn active_weekdays(&self) -> Vec<Weekday> {
        let mut out: Vec<Weekday> = self
            .days
            .iter()
            .filter(|(_, active)| **active)
            .filter_map(|(token, _)| Weekday::from_token(token))
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
#[path = "alarm_tests.rs"]
mod tests;
