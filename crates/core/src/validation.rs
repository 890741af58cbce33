// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility rules for a proposed pick.
//!
//! ## Rule order
//!
//! Rules run in a fixed order and the first failure is reported, so the
//! same proposal against the same state always yields the same rejection:
//!
//! 1. Agent on the roster
//! 2. Range well-formed
//! 3. No blackout overlap
//! 4. Pick count below the cap
//! 5. Day budget not exceeded
//! 6. Every day free of the agent and below daily capacity
//! 7. Seasonal cap not exceeded
//! 8. Agent's turn, when turn order is enforced

use crate::rejection::Rejection;
use crate::state::State;
use crate::summary::AgentSummary;
use time::Date;
use vacation_pick_domain::{
    Agent, DateRange, Pick, Policy, inclusive_day_count, range_intersects_seasonal_window,
};

/// A proposal to take time off.
///
/// Dates are optional so that a missing field is reported as a rejection
/// rather than failing earlier at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    /// The proposing agent.
    pub agent: Agent,
    /// The first day requested.
    pub start: Option<Date>,
    /// The last day requested (inclusive).
    pub end: Option<Date>,
}

impl PickRequest {
    /// Creates a request for a well-formed range.
    #[must_use]
    pub const fn for_range(agent: Agent, range: DateRange) -> Self {
        Self {
            agent,
            start: Some(range.start()),
            end: Some(range.end()),
        }
    }
}

/// A proposal that passed every rule, with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPick {
    /// The proposing agent.
    pub agent: Agent,
    /// The validated range.
    pub range: DateRange,
    /// Inclusive day count of `range`.
    pub day_count: u32,
    /// Whether `range` touches the seasonal window.
    pub is_seasonal: bool,
}

impl ValidatedPick {
    /// Converts into the pick to commit.
    #[must_use]
    pub fn into_pick(self) -> Pick {
        Pick::new(self.agent, self.range, self.day_count, self.is_seasonal)
    }
}

/// Decides whether a proposal may be committed against the current state.
///
/// This function never mutates anything.
///
/// # Arguments
///
/// * `state` - The engine context to evaluate against
/// * `request` - The proposal
///
/// # Returns
///
/// * `Ok(ValidatedPick)` with the derived day count and seasonal flag
/// * `Err(Rejection)` naming the first rule that failed
///
/// # Errors
///
/// Returns the first failing rule in the order documented at module level.
pub fn validate(state: &State, request: &PickRequest) -> Result<ValidatedPick, Rejection> {
    let agent: &Agent = &request.agent;
    let policy: &Policy = &state.policy;

    if !state.roster.contains(agent) {
        return Err(Rejection::UnknownAgent {
            agent: agent.clone(),
        });
    }

    let range: DateRange = match (request.start, request.end) {
        (Some(start), Some(end)) => {
            DateRange::new(start, end).map_err(|_| Rejection::InvalidRange {
                start: request.start,
                end: request.end,
            })?
        }
        _ => {
            return Err(Rejection::InvalidRange {
                start: request.start,
                end: request.end,
            });
        }
    };

    if let Some(blackout) = policy.blackout_overlapping(&range) {
        return Err(Rejection::BlackoutConflict {
            blackout: *blackout,
        });
    }

    let summary: AgentSummary = state.summary(agent);

    if summary.pick_count.saturating_add(1) > policy.max_picks_per_agent {
        return Err(Rejection::PickCapExceeded {
            limit: policy.max_picks_per_agent,
            current: summary.pick_count,
        });
    }

    let day_count: u32 = inclusive_day_count(&range);
    if summary.used_days.saturating_add(day_count) > policy.max_days_per_agent {
        return Err(Rejection::DayBudgetExceeded {
            limit: policy.max_days_per_agent,
            used: summary.used_days,
            requested: day_count,
        });
    }

    let capacity: usize = usize::try_from(policy.max_agents_off_per_day).unwrap_or(usize::MAX);
    for day in range.days() {
        if state.schedule.contains(day, agent) {
            return Err(Rejection::DuplicateOnDate { date: day });
        }
        let off: usize = state.schedule.count_on(day);
        if off >= capacity {
            return Err(Rejection::DateCapacityExceeded {
                date: day,
                limit: policy.max_agents_off_per_day,
                current: off,
            });
        }
    }

    let is_seasonal: bool = range_intersects_seasonal_window(&range, &policy.seasonal_window);
    if is_seasonal && summary.seasonal_pick_count.saturating_add(1) > policy.seasonal_cap {
        return Err(Rejection::SeasonalCapExceeded {
            limit: policy.seasonal_cap,
            current: summary.seasonal_pick_count,
        });
    }

    let turn_holder: Option<&Agent> = if policy.turn_order_enabled {
        state.current_turn()
    } else {
        None
    };
    if let Some(current) = turn_holder.filter(|current| *current != agent) {
        return Err(Rejection::NotYourTurn {
            current: current.clone(),
        });
    }

    Ok(ValidatedPick {
        agent: agent.clone(),
        range,
        day_count,
        is_seasonal,
    })
}
