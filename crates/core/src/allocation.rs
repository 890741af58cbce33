// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Committing and removing picks.
//!
//! These are the only functions that mutate the ledger, the schedule index
//! and the rotation. Each runs to completion without yielding; a caller that
//! shares a `State` between threads must hold one lock across the whole call.

use crate::ledger::PickLedger;
use crate::rejection::Rejection;
use crate::schedule::ScheduleIndex;
use crate::state::State;
use crate::validation::{PickRequest, ValidatedPick, validate};
use vacation_pick_domain::{Agent, Pick};

/// Validates a proposal and, if accepted, records it.
///
/// On acceptance the pick is appended to the agent's ledger entry, the agent
/// is added to every day of the range in the schedule index, and the
/// rotation advances once if turn order is enforced.
///
/// # Arguments
///
/// * `state` - The engine context
/// * `request` - The proposal
///
/// # Returns
///
/// * `Ok(Pick)` - the committed pick
/// * `Err(Rejection)` - the first failing rule; `state` is untouched
///
/// # Errors
///
/// Returns any rejection produced by [`validate`].
pub fn commit(state: &mut State, request: &PickRequest) -> Result<Pick, Rejection> {
    let validated: ValidatedPick = validate(state, request)?;
    let pick: Pick = validated.into_pick();

    state.schedule.insert_range(&pick.agent, &pick.range);
    state.ledger.append(pick.clone());
    if state.policy.turn_order_enabled {
        state.rotation.advance(state.roster.len());
    }

    Ok(pick)
}

/// Removes one of an agent's picks.
///
/// The agent is cleared from every day of the pick in the schedule index.
/// The rotation is not rewound.
///
/// # Arguments
///
/// * `state` - The engine context
/// * `agent` - The agent holding the pick
/// * `pick_index` - Index into the agent's picks, in commit order
///
/// # Errors
///
/// Returns `Rejection::NotFound` if the agent holds no pick at that index.
pub fn remove(state: &mut State, agent: &Agent, pick_index: usize) -> Result<Pick, Rejection> {
    let removed: Pick = state
        .ledger
        .remove(agent, pick_index)
        .ok_or_else(|| Rejection::NotFound {
            agent: agent.clone(),
            pick_index,
        })?;

    state.schedule.remove_range(&removed.agent, &removed.range);

    Ok(removed)
}

/// Rebuilds the schedule index from scratch by replaying every pick.
///
/// A consistent state satisfies `rebuild_index(state.ledger()) ==
/// *state.schedule()`.
#[must_use]
pub fn rebuild_index(ledger: &PickLedger) -> ScheduleIndex {
    let mut index: ScheduleIndex = ScheduleIndex::new();
    for pick in ledger.iter() {
        index.insert_range(&pick.agent, &pick.range);
    }
    index
}
