// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot form of a `State`.
//!
//! The snapshot is the serialization boundary for export, import and local
//! storage. Its field names are stable:
//!
//! ```text
//! {
//!   "agents": ["A", "B"],
//!   "policy": { ... },
//!   "picks": { "A": [ { "start": "2026-07-01", "end": "2026-07-03", "days": 3, "seasonal": true } ] },
//!   "schedule": { "2026-07-01": ["A"], ... },
//!   "rotationIndex": 1
//! }
//! ```
//!
//! Restoring never drops data. Picks that cannot be rebuilt exactly are
//! reported as corrupt; a schedule that disagrees with the picks is either
//! reported or, in [`LoadMode::Repair`], replaced by a rebuild.

use crate::allocation::rebuild_index;
use crate::error::CoreError;
use crate::ledger::PickLedger;
use crate::rotation::Rotation;
use crate::schedule::ScheduleIndex;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use vacation_pick_domain::{
    Agent, DateRange, DomainError, Pick, Policy, Roster, format_iso_date, inclusive_day_count,
    parse_iso_date, range_intersects_seasonal_window,
};

/// How to treat a stored schedule that disagrees with the stored picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Refuse the snapshot.
    #[default]
    Strict,
    /// Replace the schedule with one rebuilt from the picks.
    Repair,
}

/// A stored pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    /// First day (`YYYY-MM-DD`).
    pub start: String,
    /// Last day (`YYYY-MM-DD`, inclusive).
    pub end: String,
    /// Inclusive day count.
    pub days: u32,
    /// Whether the pick touches the seasonal window.
    pub seasonal: bool,
}

/// Serializable image of a complete `State`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Agent names in roster order.
    pub agents: Vec<String>,
    /// The active policy.
    pub policy: Policy,
    /// Picks per agent, in commit order.
    pub picks: BTreeMap<String, Vec<PickRecord>>,
    /// Agents off per date.
    pub schedule: BTreeMap<String, Vec<String>>,
    /// Raw rotation index.
    pub rotation_index: usize,
}

impl Snapshot {
    /// Captures a state.
    ///
    /// # Errors
    ///
    /// Returns an error if a date cannot be rendered.
    pub fn capture(state: &State) -> Result<Self, CoreError> {
        let agents: Vec<String> = state
            .roster
            .iter()
            .map(|agent| agent.name().to_string())
            .collect();

        let mut picks: BTreeMap<String, Vec<PickRecord>> = BTreeMap::new();
        for pick in state.ledger.iter() {
            let record: PickRecord = PickRecord {
                start: format_iso_date(pick.range.start())?,
                end: format_iso_date(pick.range.end())?,
                days: pick.day_count,
                seasonal: pick.is_seasonal,
            };
            picks
                .entry(pick.agent.name().to_string())
                .or_default()
                .push(record);
        }

        let mut schedule: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (date, agents_off) in &state.schedule {
            schedule.insert(
                format_iso_date(*date)?,
                agents_off
                    .iter()
                    .map(|agent| agent.name().to_string())
                    .collect(),
            );
        }

        Ok(Self {
            agents,
            policy: state.policy.clone(),
            picks,
            schedule,
            rotation_index: state.rotation.index(),
        })
    }

    /// Rebuilds a state from this snapshot.
    ///
    /// # Arguments
    ///
    /// * `mode` - Whether a mismatched schedule is refused or rebuilt
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CorruptState` if:
    /// - The roster or policy is invalid
    /// - A pick names an unknown agent or holds an invalid range
    /// - A pick's stored day count or seasonal flag disagrees with its range
    /// - An agent holds two picks covering the same date
    /// - The schedule disagrees with the picks and `mode` is `Strict`
    pub fn restore(self, mode: LoadMode) -> Result<State, CoreError> {
        let roster: Roster = Roster::from_names(&self.agents).map_err(|e| corrupt(&e))?;
        self.policy.validate().map_err(|e| corrupt(&e))?;

        let ledger: PickLedger = restore_ledger(&roster, &self.policy, &self.picks)?;
        let rebuilt: ScheduleIndex = rebuild_index(&ledger);

        let schedule: ScheduleIndex = match (restore_schedule(&roster, &self.schedule), mode) {
            (Ok(stored), _) if stored == rebuilt => stored,
            (_, LoadMode::Repair) => rebuilt,
            (Ok(_), LoadMode::Strict) => {
                return Err(CoreError::CorruptState {
                    reason: String::from("schedule does not match the recorded picks"),
                });
            }
            (Err(err), LoadMode::Strict) => return Err(err),
        };

        let rotation: Rotation =
            Rotation::new(self.rotation_index.checked_rem(roster.len()).unwrap_or(0));

        Ok(State {
            roster,
            policy: self.policy,
            ledger,
            schedule,
            rotation,
        })
    }
}

fn corrupt(err: &DomainError) -> CoreError {
    CoreError::CorruptState {
        reason: err.to_string(),
    }
}

fn restore_ledger(
    roster: &Roster,
    policy: &Policy,
    records: &BTreeMap<String, Vec<PickRecord>>,
) -> Result<PickLedger, CoreError> {
    let mut ledger: PickLedger = PickLedger::new();
    let mut covered: ScheduleIndex = ScheduleIndex::new();

    for (name, agent_records) in records {
        let agent: Agent = Agent::new(name);
        if !roster.contains(&agent) {
            return Err(CoreError::CorruptState {
                reason: format!("picks recorded for unknown agent '{name}'"),
            });
        }

        for (i, record) in agent_records.iter().enumerate() {
            let start: Date = parse_iso_date(&record.start).map_err(|e| corrupt(&e))?;
            let end: Date = parse_iso_date(&record.end).map_err(|e| corrupt(&e))?;
            let range: DateRange = DateRange::new(start, end).map_err(|e| corrupt(&e))?;

            let day_count: u32 = inclusive_day_count(&range);
            if day_count != record.days {
                return Err(CoreError::CorruptState {
                    reason: format!(
                        "pick {i} of '{name}' records {} days but {range} spans {day_count}",
                        record.days
                    ),
                });
            }
            let is_seasonal: bool =
                range_intersects_seasonal_window(&range, &policy.seasonal_window);
            if is_seasonal != record.seasonal {
                return Err(CoreError::CorruptState {
                    reason: format!("pick {i} of '{name}' has a wrong seasonal flag"),
                });
            }

            for day in range.days() {
                if !covered.insert_day(day, &agent) {
                    return Err(CoreError::CorruptState {
                        reason: format!("'{name}' holds more than one pick covering {day}"),
                    });
                }
            }

            ledger.append(Pick::new(agent.clone(), range, day_count, is_seasonal));
        }
    }

    Ok(ledger)
}

fn restore_schedule(
    roster: &Roster,
    stored: &BTreeMap<String, Vec<String>>,
) -> Result<ScheduleIndex, CoreError> {
    let mut schedule: ScheduleIndex = ScheduleIndex::new();

    for (date_string, names) in stored {
        let date: Date = parse_iso_date(date_string).map_err(|e| corrupt(&e))?;
        if names.is_empty() {
            return Err(CoreError::CorruptState {
                reason: format!("schedule holds an empty entry for {date}"),
            });
        }
        for name in names {
            let agent: Agent = Agent::new(name);
            if !roster.contains(&agent) {
                return Err(CoreError::CorruptState {
                    reason: format!("schedule names unknown agent '{name}' on {date}"),
                });
            }
            if !schedule.insert_day(date, &agent) {
                return Err(CoreError::CorruptState {
                    reason: format!("schedule lists '{name}' twice on {date}"),
                });
            }
        }
    }

    Ok(schedule)
}
