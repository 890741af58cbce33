// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::allocation::{commit, remove};
use crate::command::Command;
use crate::error::CoreError;
use crate::state::State;
use crate::validation::PickRequest;
use vacation_pick_domain::{Agent, Pick};

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A pick was committed.
    PickCommitted(Pick),
    /// A pick was withdrawn.
    PickWithdrawn(Pick),
    /// The rotation moved; holds the agent now up, if any.
    RotationMoved(Option<Agent>),
    /// The policy was replaced.
    PolicyReplaced,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub outcome: Outcome,
}

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified; on error there is nothing to roll
/// back.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is refused
///
/// # Errors
///
/// Returns an error if:
/// - A pick rule rejects a proposal or withdrawal
/// - A replacement policy fails validation
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_state: State = state.clone();

    let outcome: Outcome = match command {
        Command::ProposePick { agent, start, end } => {
            let request: PickRequest = PickRequest { agent, start, end };
            Outcome::PickCommitted(commit(&mut new_state, &request)?)
        }
        Command::WithdrawPick { agent, pick_index } => {
            Outcome::PickWithdrawn(remove(&mut new_state, &agent, pick_index)?)
        }
        Command::AdvanceRotation => {
            new_state.rotation.advance(new_state.roster.len());
            Outcome::RotationMoved(new_state.current_turn().cloned())
        }
        Command::RetreatRotation => {
            new_state.rotation.retreat(new_state.roster.len());
            Outcome::RotationMoved(new_state.current_turn().cloned())
        }
        Command::ReplacePolicy(policy) => {
            policy.validate()?;
            new_state.ledger.reclassify_seasonal(&policy.seasonal_window);
            new_state.policy = policy;
            Outcome::PolicyReplaced
        }
    };

    Ok(TransitionResult { new_state, outcome })
}
