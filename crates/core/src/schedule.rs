// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date index of agents who are off.
//!
//! ## Invariants
//!
//! - Every day of every committed pick maps to a set holding its agent once
//! - No agent appears on a date it holds no pick for
//! - A date with no agents is absent, never present with an empty set

use std::collections::{BTreeMap, BTreeSet, btree_map};
use time::Date;
use vacation_pick_domain::{Agent, DateRange};

/// Mapping from calendar date to the agents off that date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleIndex {
    days: BTreeMap<Date, BTreeSet<Agent>>,
}

impl ScheduleIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Returns the agents off on a date, if any.
    #[must_use]
    pub fn agents_on(&self, date: Date) -> Option<&BTreeSet<Agent>> {
        self.days.get(&date)
    }

    /// Returns how many agents are off on a date.
    #[must_use]
    pub fn count_on(&self, date: Date) -> usize {
        self.days.get(&date).map_or(0, BTreeSet::len)
    }

    /// Checks if an agent is off on a date.
    #[must_use]
    pub fn contains(&self, date: Date, agent: &Agent) -> bool {
        self.days.get(&date).is_some_and(|agents| agents.contains(agent))
    }

    /// Iterates dates in ascending order with their agents.
    pub fn iter(&self) -> btree_map::Iter<'_, Date, BTreeSet<Agent>> {
        self.days.iter()
    }

    /// Returns the number of dates with at least one agent off.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if nobody is off on any date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Marks an agent off on one date.
    ///
    /// Returns `false` if the agent was already present.
    pub(crate) fn insert_day(&mut self, date: Date, agent: &Agent) -> bool {
        self.days.entry(date).or_default().insert(agent.clone())
    }

    /// Marks an agent off on every day of a range.
    pub(crate) fn insert_range(&mut self, agent: &Agent, range: &DateRange) {
        for day in range.days() {
            self.insert_day(day, agent);
        }
    }

    /// Clears an agent from every day of a range, dropping emptied dates.
    pub(crate) fn remove_range(&mut self, agent: &Agent, range: &DateRange) {
        for day in range.days() {
            if let Some(agents) = self.days.get_mut(&day) {
                agents.remove(agent);
                if agents.is_empty() {
                    self.days.remove(&day);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a ScheduleIndex {
    type Item = (&'a Date, &'a BTreeSet<Agent>);
    type IntoIter = btree_map::Iter<'a, Date, BTreeSet<Agent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
