//! Day and week expression resolution
//!
//! Arguments are either empty, an explicit `M/D` date, or a signed integer
//! offset. Everything is resolved against an injected `today` so results do
//! not depend on the wall clock.

use crate::{
    core::schedule::{DAY_KEY_PATTERN, DayKey},
    error::{Result, ShienError},
};
use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use tracing::{debug, instrument};

/// Number of days in a resolved week (Monday through Friday)
pub const WEEK_LEN: usize = 5;

/// The day a single-day expression refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayTarget {
    /// A calendar date relative to today
    Date(NaiveDate),
    /// An explicit `M/D`, looked up by key without calendar validation
    Key(DayKey),
}

/// Monday through Friday of one week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekRange {
    /// The range starting at `start`, if all five days fit in the calendar
    pub fn starting(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(WEEK_LEN as u64 - 1))?;
        Some(Self { start, end })
    }

    /// The week containing `date`; weekends belong to the preceding Monday
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let back = u64::from(date.weekday().num_days_from_monday());
        Self::starting(date.checked_sub_days(Days::new(back))?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last weekday of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The five dates in order
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(WEEK_LEN)
    }
}

/// Shift `date` by a signed number of days
pub fn offset_date(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Resolves user expressions relative to a fixed "today"
pub struct DateResolver {
    today: NaiveDate,
    re_day_key: Regex,
    re_offset: Regex,
}

impl DateResolver {
    /// Create a new resolver anchored at `today`
    pub fn new(today: NaiveDate) -> Result<Self> {
        Ok(Self {
            today,
            re_day_key: Regex::new(DAY_KEY_PATTERN)
                .map_err(|e| ShienError::config(format!("Failed to compile regex: {}", e)))?,
            re_offset: Regex::new(r"^-?[0-9]+$")
                .map_err(|e| ShienError::config(format!("Failed to compile regex: {}", e)))?,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Resolve a single-day expression
    ///
    /// `""` is today, `"3"` is three days from today, `"5/22"` is May 22.
    #[instrument(skip(self))]
    pub fn resolve_day(&self, arg: &str) -> Result<DayTarget> {
        if let Some(caps) = self.re_day_key.captures(arg) {
            let key = DayKey::from_captures(&caps);
            debug!("Resolved '{}' to day key {}", arg, key);
            return Ok(DayTarget::Key(key));
        }

        let offset = if arg.is_empty() { 0 } else { self.parse_offset(arg)? };
        let date = self.day_offset(offset, arg)?;
        debug!("Resolved '{}' to {} (today {})", arg, date, self.today());
        Ok(DayTarget::Date(date))
    }

    /// Resolve a week expression
    ///
    /// `""` is this week, `"-1"` is last week, `"5/22"` is the week of May 22
    /// in the current year.
    #[instrument(skip(self))]
    pub fn resolve_week(&self, arg: &str) -> Result<WeekRange> {
        let week = if let Some(caps) = self.re_day_key.captures(arg) {
            let key = DayKey::from_captures(&caps);
            key.month_day()
                .and_then(|(month, day)| self.date_in_current_year(month, day))
                .and_then(WeekRange::containing)
        } else {
            let weeks = if arg.is_empty() { 0 } else { self.parse_offset(arg)? };
            weeks
                .checked_mul(7)
                .and_then(|days| {
                    days.checked_sub(i64::from(self.today.weekday().num_days_from_monday()))
                })
                .and_then(|monday| offset_date(self.today, monday))
                .and_then(WeekRange::starting)
        }
        .ok_or_else(|| ShienError::invalid_argument(arg))?;

        debug!(
            "Resolved '{}' to {} .. {} (today {})",
            arg,
            week.start(),
            week.end(),
            self.today()
        );
        Ok(week)
    }

    /// `month/day` in today's year; Feb 29 of a common year rolls over to Mar 1
    fn date_in_current_year(&self, month: u32, day: u32) -> Option<NaiveDate> {
        let year = self.today.year();
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            (month == 2 && day == 29)
                .then(|| NaiveDate::from_ymd_opt(year, 3, 1))
                .flatten()
        })
    }

    fn parse_offset(&self, arg: &str) -> Result<i64> {
        if !self.re_offset.is_match(arg) {
            return Err(ShienError::invalid_argument(arg));
        }
        arg.parse().map_err(|_| ShienError::invalid_argument(arg))
    }

    fn day_offset(&self, offset: i64, arg: &str) -> Result<NaiveDate> {
        offset_date(self.today, offset).ok_or_else(|| ShienError::invalid_argument(arg))
    }
}
