//! Calendar bucketing for the attendance heatmap and the weekly views.
//!
//! Two fixed-length windows are derived from an anchor date:
//!
//! - [`TrailingWindow`]: the 30 days ending on (and including) the anchor.
//! - [`Week`]: the Monday→Sunday week containing the anchor.
//!
//! Both are plain values; iterating them has no side effects and can be
//! repeated.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ISO_DATE_FORMAT;

/// Number of days in the trailing heatmap window.
pub const TRAILING_WINDOW_DAYS: i64 = 30;

/// Days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Parse a `YYYY-MM-DD` string.
///
/// The year must be exactly four digits. Signed or longer years parse
/// under `%Y` but sit at the edge of chrono's range, where week and
/// window arithmetic overflows.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    let invalid = |reason: &dyn std::fmt::Display| {
        CoreError::Validation(format!("Invalid date '{value}': {reason}"))
    };
    if !is_iso_shape(trimmed) {
        return Err(invalid(&"expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|e| invalid(&e))
}

fn is_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The Monday on or before `date`.
///
/// Sunday belongs to the week that started six days earlier; it is never
/// treated as a week start.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_since_monday)
}

// ---------------------------------------------------------------------------
// Trailing window
// ---------------------------------------------------------------------------

/// The [`TRAILING_WINDOW_DAYS`] days ending on `anchor`, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    anchor: NaiveDate,
}

impl TrailingWindow {
    pub fn ending(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Window ending on the local calendar date.
    pub fn ending_today() -> Self {
        Self::ending(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// First (oldest) day of the window.
    pub fn start(&self) -> NaiveDate {
        self.anchor - Duration::days(TRAILING_WINDOW_DAYS - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.anchor
    }

    /// Days in the window, oldest → newest.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let anchor = self.anchor;
        (0..TRAILING_WINDOW_DAYS)
            .rev()
            .map(move |back| anchor - Duration::days(back))
    }

    pub fn iso_strings(&self) -> Vec<String> {
        self.days().map(to_iso).collect()
    }
}

// ---------------------------------------------------------------------------
// Week
// ---------------------------------------------------------------------------

/// A Monday→Sunday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week {
    monday: NaiveDate,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            monday: monday_of(date),
        }
    }

    /// The week containing a `YYYY-MM-DD` date string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        parse_iso_date(value).map(Self::containing)
    }

    /// The week containing the local calendar date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(DAYS_PER_WEEK - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday && date <= self.sunday()
    }

    pub fn previous(&self) -> Self {
        Self::containing(self.monday - Duration::days(DAYS_PER_WEEK))
    }

    pub fn next(&self) -> Self {
        Self::containing(self.monday + Duration::days(DAYS_PER_WEEK))
    }

    /// Monday → Sunday.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let monday = self.monday;
        (0..DAYS_PER_WEEK).map(move |offset| monday + Duration::days(offset))
    }

    pub fn iso_strings(&self) -> Vec<String> {
        self.days().map(to_iso).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
