// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day arithmetic for pick ranges.
//!
//! Everything here works at calendar-day granularity on `time::Date`.
//! There is no time-of-day and no timezone.
//!
//! ## Seasonal windows
//!
//! A seasonal window is a recurring month/day span (e.g. Jun 21 - Sep 3).
//! Its bounds are re-derived from the year of the date being tested, so a
//! range that crosses a year boundary is evaluated correctly day by day.

use crate::error::DomainError;
use crate::types::DateRange;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use time::format_description::FormatItem;
use time::{Date, Month};

/// The `YYYY-MM-DD` boundary format used for every serialized date.
pub const ISO_DATE_FORMAT: &[FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// A recurring month/day pair, independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    /// The month (1-12).
    pub month: u8,
    /// The day of the month.
    pub day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay`.
    ///
    /// February 29 is accepted; in non-leap years it resolves to February 28.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a day of any year.
    pub fn new(month: u8, day: u8) -> Result<Self, DomainError> {
        let month_day: Self = Self { month, day };
        month_day.validate()?;
        Ok(month_day)
    }

    /// Checks that the pair names a day in a leap year.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is outside 1-12 or the day does not
    /// exist in that month.
    pub fn validate(&self) -> Result<(), DomainError> {
        let valid: bool = Month::try_from(self.month)
            .ok()
            .is_some_and(|month| Date::from_calendar_date(2024, month, self.day).is_ok());
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidMonthDay {
                month: self.month,
                day: self.day,
            })
        }
    }

    /// Resolves this month/day in the given year.
    ///
    /// Days past the end of the month clamp to its last day.
    #[must_use]
    pub fn in_year(&self, year: i32) -> Option<Date> {
        let month: Month = Month::try_from(self.month).ok()?;
        (1..=self.day)
            .rev()
            .find_map(|day| Date::from_calendar_date(year, month, day).ok())
    }
}

/// A yearly recurring window with a stricter pick cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonalWindow {
    /// First day of the window.
    pub start: MonthDay,
    /// Last day of the window (inclusive).
    pub end: MonthDay,
}

impl SeasonalWindow {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the window runs past December 31 into January.
    #[must_use]
    pub fn wraps_year(&self) -> bool {
        (self.start.month, self.start.day) > (self.end.month, self.end.day)
    }
}

impl Default for SeasonalWindow {
    /// June 21 through September 3.
    fn default() -> Self {
        Self {
            start: MonthDay { month: 6, day: 21 },
            end: MonthDay { month: 9, day: 3 },
        }
    }
}

/// Returns the number of calendar days in the range, counting both ends.
///
/// A single-day range has a count of 1.
#[must_use]
pub fn inclusive_day_count(range: &DateRange) -> u32 {
    let whole_days: i64 = (range.end() - range.start()).whole_days();
    u32::try_from(whole_days)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Iterator over the days of a [`DateRange`] in ascending order.
///
/// The iterator is `Clone`; clone it before consuming to walk the range again.
#[derive(Debug, Clone)]
pub struct DaysOf {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DaysOf {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next.filter(|day| *day <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self.next.filter(|day| *day <= self.end).map_or(0, |day| {
            usize::try_from((self.end - day).whole_days())
                .unwrap_or(usize::MAX)
                .saturating_add(1)
        });
        (remaining, Some(remaining))
    }
}

impl FusedIterator for DaysOf {}

/// Returns every day of the range, both endpoints included.
#[must_use]
pub const fn days_of(range: &DateRange) -> DaysOf {
    DaysOf {
        next: Some(range.start()),
        end: range.end(),
    }
}

/// Tests whether a date falls inside the seasonal window of its own year.
///
/// For a window that wraps the year end (e.g. Dec 15 - Jan 5) the date
/// matches if it is on or after the start or on or before the end.
#[must_use]
pub fn is_in_seasonal_window(date: Date, window: &SeasonalWindow) -> bool {
    let year: i32 = date.year();
    let (Some(start), Some(end)) = (window.start.in_year(year), window.end.in_year(year)) else {
        return false;
    };

    if window.wraps_year() {
        date >= start || date <= end
    } else {
        start <= date && date <= end
    }
}

/// Returns `true` if any day of the range is inside the seasonal window.
#[must_use]
pub fn range_intersects_seasonal_window(range: &DateRange, window: &SeasonalWindow) -> bool {
    days_of(range).any(|day| is_in_seasonal_window(day, window))
}

/// Returns `true` if the two inclusive ranges share at least one day.
#[must_use]
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    !(a.end() < b.start() || b.end() < a.start())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Renders a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be rendered.
pub fn format_iso_date(date: Date) -> Result<String, DomainError> {
    date.format(ISO_DATE_FORMAT)
        .map_err(|e| DomainError::DateFormatError {
            date,
            error: e.to_string(),
        })
}
