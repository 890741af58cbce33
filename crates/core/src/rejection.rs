// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use vacation_pick_domain::{Agent, DateRange};

/// Why a proposed pick or a withdrawal was refused.
///
/// Rejections are ordinary values. Every variant carries enough context to
/// render a message without consulting the state again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The agent is not on the roster.
    UnknownAgent {
        /// The agent that was named.
        agent: Agent,
    },
    /// A date is missing or the range ends before it starts.
    InvalidRange {
        /// The proposed first day, if supplied.
        start: Option<Date>,
        /// The proposed last day, if supplied.
        end: Option<Date>,
    },
    /// The range overlaps a blackout range.
    BlackoutConflict {
        /// The blackout range that was hit.
        blackout: DateRange,
    },
    /// The agent already holds the maximum number of picks.
    PickCapExceeded {
        /// The policy limit.
        limit: u32,
        /// Picks currently held.
        current: u32,
    },
    /// The pick would take the agent past their day budget.
    DayBudgetExceeded {
        /// The policy limit.
        limit: u32,
        /// Days already used.
        used: u32,
        /// Days requested by this pick.
        requested: u32,
    },
    /// The agent is already off on a date inside the range.
    DuplicateOnDate {
        /// The first date already held.
        date: Date,
    },
    /// A date inside the range has no capacity left.
    DateCapacityExceeded {
        /// The first full date.
        date: Date,
        /// The policy limit.
        limit: u32,
        /// Agents already off on that date.
        current: usize,
    },
    /// The agent already holds the maximum number of seasonal picks.
    SeasonalCapExceeded {
        /// The policy limit.
        limit: u32,
        /// Seasonal picks currently held.
        current: u32,
    },
    /// Turn order is enforced and another agent is up.
    NotYourTurn {
        /// The agent whose turn it is.
        current: Agent,
    },
    /// The agent holds no pick at that index.
    NotFound {
        /// The agent that was named.
        agent: Agent,
        /// The requested pick index.
        pick_index: usize,
    },
}

impl Rejection {
    /// Returns the stable name of this rejection kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownAgent { .. } => "UnknownAgent",
            Self::InvalidRange { .. } => "InvalidRange",
            Self::BlackoutConflict { .. } => "BlackoutConflict",
            Self::PickCapExceeded { .. } => "PickCapExceeded",
            Self::DayBudgetExceeded { .. } => "DayBudgetExceeded",
            Self::DuplicateOnDate { .. } => "DuplicateOnDate",
            Self::DateCapacityExceeded { .. } => "DateCapacityExceeded",
            Self::SeasonalCapExceeded { .. } => "SeasonalCapExceeded",
            Self::NotYourTurn { .. } => "NotYourTurn",
            Self::NotFound { .. } => "NotFound",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAgent { agent } => write!(f, "Agent '{agent}' is not on the roster"),
            Self::InvalidRange { start, end } => match (start, end) {
                (Some(start), Some(end)) => {
                    write!(f, "Invalid range: end {end} is before start {start}")
                }
                _ => write!(f, "Invalid range: both a start and an end date are required"),
            },
            Self::BlackoutConflict { blackout } => {
                write!(f, "Range overlaps blackout period {blackout}")
            }
            Self::PickCapExceeded { limit, current } => {
                write!(f, "Pick limit reached: {current} of {limit} picks already used")
            }
            Self::DayBudgetExceeded {
                limit,
                used,
                requested,
            } => {
                write!(
                    f,
                    "Day budget exceeded: {used} days used + {requested} requested exceeds {limit}"
                )
            }
            Self::DuplicateOnDate { date } => {
                write!(f, "Agent is already off on {date}")
            }
            Self::DateCapacityExceeded {
                date,
                limit,
                current,
            } => {
                write!(
                    f,
                    "No capacity on {date}: {current} of {limit} agents already off"
                )
            }
            Self::SeasonalCapExceeded { limit, current } => {
                write!(
                    f,
                    "Seasonal limit reached: {current} of {limit} seasonal picks already used"
                )
            }
            Self::NotYourTurn { current } => write!(f, "Not your turn: it is {current}'s turn"),
            Self::NotFound { agent, pick_index } => {
                write!(f, "Agent '{agent}' has no pick at index {pick_index}")
            }
        }
    }
}

impl std::error::Error for Rejection {}
