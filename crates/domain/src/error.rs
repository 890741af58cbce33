// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },
    /// A month/day pair does not name a calendar day.
    InvalidMonthDay {
        /// The month (1-12).
        month: u8,
        /// The day of the month.
        day: u8,
    },
    /// A policy field holds a value outside its permitted domain.
    InvalidPolicy {
        /// The offending field (wire name).
        field: &'static str,
        /// A description of the constraint that was violated.
        reason: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to render a date in the boundary format.
    DateFormatError {
        /// The date that could not be rendered.
        date: Date,
        /// The formatting error message.
        error: String,
    },
    /// Agent name is empty or invalid.
    InvalidAgent(String),
    /// The same agent appears twice in a roster.
    DuplicateAgent(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: end {end} is before start {start}")
            }
            Self::InvalidMonthDay { month, day } => {
                write!(f, "Invalid month/day: {month}/{day} is not a calendar day")
            }
            Self::InvalidPolicy { field, reason } => {
                write!(f, "Invalid policy field '{field}': {reason}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { date, error } => {
                write!(f, "Failed to format date {date}: {error}")
            }
            Self::InvalidAgent(msg) => write!(f, "Invalid agent: {msg}"),
            Self::DuplicateAgent(name) => {
                write!(f, "Agent '{name}' appears more than once in the roster")
            }
        }
    }
}

impl std::error::Error for DomainError {}
