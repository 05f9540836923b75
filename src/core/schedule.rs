//! In-memory shift schedule
//!
//! Maps a yearless `M/D` day key to the shifts published for that day.

use chrono::{Datelike, NaiveDate};
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Number of shift slots carried by every day
pub const SLOT_COUNT: usize = 10;

/// Pattern for the `M/D` part of a cell or argument (ASCII digits only)
pub const DAY_KEY_PATTERN: &str = r"([0-9]+)/([0-9]+)";

/// Yearless `month/day` key without zero padding, e.g. `5/22`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(String);

impl DayKey {
    /// Build the key for a calendar date, discarding the year
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{}/{}", date.month(), date.day()))
    }

    /// Build a key from a [`DAY_KEY_PATTERN`] match
    ///
    /// Leading zeros are dropped so that `05/07` and `5/7` name the same day.
    pub fn from_captures(caps: &Captures<'_>) -> Self {
        let month = strip_zeros(&caps[1]);
        let day = strip_zeros(&caps[2]);
        Self(format!("{month}/{day}"))
    }

    /// Month and day as numbers, if they fit
    pub fn month_day(&self) -> Option<(u32, u32)> {
        let (month, day) = self.0.split_once('/')?;
        Some((month.parse().ok()?, day.parse().ok()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn strip_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One day's shifts as published in the spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Date label exactly as found in the first column
    pub date: String,
    /// Shift slots in fixed order: 1st, 2nd, lunch, 3rd, 4th, 5th, night,
    /// then the three supplementary categories
    pub slots: [String; SLOT_COUNT],
}

impl DayRecord {
    pub fn new(date: impl Into<String>, slots: [String; SLOT_COUNT]) -> Self {
        Self {
            date: date.into(),
            slots,
        }
    }
}

/// Day-keyed schedule built once at startup
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    days: HashMap<DayKey, DayRecord>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a day, replacing any earlier row with the same key
    pub fn insert(&mut self, key: DayKey, record: DayRecord) {
        if let Some(previous) = self.days.insert(key.clone(), record) {
            debug!("Row for {} replaces earlier row '{}'", key, previous.date);
        }
    }

    pub fn get(&self, key: &DayKey) -> Option<&DayRecord> {
        self.days.get(key)
    }

    /// Look up a calendar date by its yearless key
    pub fn get_date(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.get(&DayKey::from_date(date))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
