// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{DaysOf, days_of, inclusive_day_count};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Represents a roster member eligible to hold picks.
///
/// An agent is identified by its display name. Names are trimmed on
/// construction; comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Agent {
    /// The display name.
    name: String,
}

impl Agent {
    /// Creates a new `Agent`.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name (surrounding whitespace is removed)
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The ordered list of agents.
///
/// Order defines turn order and seniority display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    agents: Vec<Agent>,
}

impl Roster {
    /// Creates a roster, rejecting empty or repeated names.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An agent name is empty
    /// - The same agent appears twice
    pub fn new(agents: Vec<Agent>) -> Result<Self, DomainError> {
        for (i, agent) in agents.iter().enumerate() {
            if agent.name().is_empty() {
                return Err(DomainError::InvalidAgent(String::from(
                    "Agent name cannot be empty",
                )));
            }
            if agents[..i].contains(agent) {
                return Err(DomainError::DuplicateAgent(agent.name().to_string()));
            }
        }
        Ok(Self { agents })
    }

    /// Creates a roster from display names.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Roster::new`].
    pub fn from_names<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|n| Agent::new(n.as_ref())).collect())
    }

    /// Returns the number of agents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns `true` if the roster has no agents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Returns the agent at a roster position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Agent> {
        self.agents.get(position)
    }

    /// Returns the roster position of an agent.
    #[must_use]
    pub fn position(&self, agent: &Agent) -> Option<usize> {
        self.agents.iter().position(|a| a == agent)
    }

    /// Checks if an agent is on the roster.
    #[must_use]
    pub fn contains(&self, agent: &Agent) -> bool {
        self.agents.contains(agent)
    }

    /// Iterates the agents in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

/// An inclusive span of calendar days.
///
/// The start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRepr", into = "DateRangeRepr")]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single day.
    #[must_use]
    pub const fn single_day(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days, both ends included.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        inclusive_day_count(self)
    }

    /// Iterates the days of the range in ascending order.
    #[must_use]
    pub const fn days(&self) -> DaysOf {
        days_of(self)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Wire form of [`DateRange`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct DateRangeRepr {
    #[serde(with = "iso_date")]
    start: Date,
    #[serde(with = "iso_date")]
    end: Date,
}

impl TryFrom<DateRangeRepr> for DateRange {
    type Error = DomainError;

    fn try_from(repr: DateRangeRepr) -> Result<Self, Self::Error> {
        Self::new(repr.start, repr.end)
    }
}

impl From<DateRange> for DateRangeRepr {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A committed time-off range held by one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// The agent holding the pick.
    pub agent: Agent,
    /// The days taken.
    pub range: DateRange,
    /// Inclusive day count of `range`.
    pub day_count: u32,
    /// Whether any day of `range` falls inside the seasonal window.
    pub is_seasonal: bool,
}

impl Pick {
    /// Creates a new `Pick` from already-derived attributes.
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent holding the pick
    /// * `range` - The days taken
    /// * `day_count` - Inclusive day count of the range
    /// * `is_seasonal` - Whether the range touches the seasonal window
    #[must_use]
    pub const fn new(agent: Agent, range: DateRange, day_count: u32, is_seasonal: bool) -> Self {
        Self {
            agent,
            range,
            day_count,
            is_seasonal,
        }
    }
}
