// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_AGENTS, EngineConfig, load_config, load_policy};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_rejection};
pub use request_response::{
    AgentSummaryInfo, ListPicksResponse, PickInfo, ProposePickRequest, ProposePickResponse,
    ReplacePolicyResponse, ScheduleResponse, SummariesResponse, TurnResponse, WithdrawPickRequest,
    WithdrawPickResponse,
};

use std::collections::BTreeMap;
use time::Date;
use tracing::{debug, info, warn};
use vacation_pick::{
    AgentSummary, Command, CoreError, LoadMode, Outcome, Snapshot, State, TransitionResult, apply,
};
use vacation_pick_domain::{Agent, Pick, Policy, format_iso_date, parse_iso_date};

/// The result of a mutating API operation.
///
/// The caller decides whether to adopt `new_state`; the input state is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: State,
}

/// Proposes a pick via the API boundary.
///
/// This function:
/// - Parses the request's dates
/// - Applies a `ProposePick` command to the current state
/// - Translates any errors to API errors
///
/// A missing or blank date is reported as an `InvalidRange` rejection, so
/// callers see the same error whether a date was omitted or reversed.
///
/// # Arguments
///
/// * `state` - The current state
/// * `request` - The pick proposal
///
/// # Errors
///
/// Returns an error if:
/// - A date is present but not `YYYY-MM-DD`
/// - Any pick rule rejects the proposal
pub fn propose_pick(
    state: &State,
    request: &ProposePickRequest,
) -> Result<ApiResult<ProposePickResponse>, ApiError> {
    let agent: Agent = Agent::new(&request.agent);
    let start: Option<Date> = parse_optional_date("start", request.start.as_deref())?;
    let end: Option<Date> = parse_optional_date("end", request.end.as_deref())?;

    let command: Command = Command::ProposePick {
        agent: agent.clone(),
        start,
        end,
    };

    let transition: TransitionResult = apply(state, command).map_err(|err| {
        warn!(agent = %agent, error = %err, "Pick proposal rejected");
        translate_core_error(err)
    })?;

    let Outcome::PickCommitted(pick) = &transition.outcome else {
        return Err(unexpected_outcome(&transition.outcome));
    };
    let pick_index: usize = transition
        .new_state
        .ledger()
        .picks_for(&pick.agent)
        .len()
        .saturating_sub(1);
    let pick: PickInfo = pick_info(pick, pick_index)?;

    info!(
        agent = %agent,
        start = %pick.start,
        end = %pick.end,
        days = pick.days,
        seasonal = pick.seasonal,
        "Pick committed"
    );

    let turn_order_enabled: bool = transition.new_state.policy().turn_order_enabled;
    let next_turn: Option<String> = transition
        .new_state
        .current_turn()
        .filter(|_| turn_order_enabled)
        .map(|a| a.name().to_string());

    let response: ProposePickResponse = ProposePickResponse {
        message: format!(
            "Committed {} day(s) for '{}' from {} to {}",
            pick.days, pick.agent, pick.start, pick.end
        ),
        pick,
        next_turn,
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
    })
}

/// Withdraws one of an agent's picks.
///
/// Later picks of the same agent move down one index. The rotation is not
/// rewound.
///
/// # Errors
///
/// Returns an error if the agent holds no pick at that index.
pub fn withdraw_pick(
    state: &State,
    request: &WithdrawPickRequest,
) -> Result<ApiResult<WithdrawPickResponse>, ApiError> {
    let agent: Agent = Agent::new(&request.agent);
    let command: Command = Command::WithdrawPick {
        agent: agent.clone(),
        pick_index: request.pick_index,
    };

    let transition: TransitionResult = apply(state, command).map_err(|err| {
        warn!(agent = %agent, pick_index = request.pick_index, error = %err, "Withdrawal rejected");
        translate_core_error(err)
    })?;

    let Outcome::PickWithdrawn(pick) = &transition.outcome else {
        return Err(unexpected_outcome(&transition.outcome));
    };
    let pick: PickInfo = pick_info(pick, request.pick_index)?;

    info!(
        agent = %agent,
        pick_index = request.pick_index,
        days = pick.days,
        "Pick withdrawn"
    );

    let response: WithdrawPickResponse = WithdrawPickResponse {
        message: format!(
            "Withdrew '{}' pick from {} to {}",
            pick.agent, pick.start, pick.end
        ),
        pick,
    };

    Ok(ApiResult {
        response,
        new_state: transition.new_state,
    })
}

/// Returns every agent's summary, in roster order.
#[must_use]
pub fn get_summaries(state: &State) -> SummariesResponse {
    debug!("Deriving agent summaries");
    let summaries: Vec<AgentSummaryInfo> = state
        .summaries()
        .into_iter()
        .map(|summary: AgentSummary| AgentSummaryInfo {
            agent: summary.agent.name().to_string(),
            used_days: summary.used_days,
            remaining_days: summary.remaining_days,
            pick_count: summary.pick_count,
            seasonal_pick_count: summary.seasonal_pick_count,
        })
        .collect();
    SummariesResponse { summaries }
}

/// Returns the agents off on each date.
///
/// # Errors
///
/// Returns an error if a date cannot be rendered.
pub fn get_schedule_index(state: &State) -> Result<ScheduleResponse, ApiError> {
    debug!(dates = state.schedule().len(), "Rendering schedule index");
    let mut schedule: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (date, agents) in state.schedule() {
        schedule.insert(
            format_iso_date(*date).map_err(translate_domain_error)?,
            agents.iter().map(|a| a.name().to_string()).collect(),
        );
    }
    Ok(ScheduleResponse { schedule })
}

/// Lists every pick in roster order, then commit order.
///
/// # Errors
///
/// Returns an error if a date cannot be rendered.
pub fn list_picks(state: &State) -> Result<ListPicksResponse, ApiError> {
    debug!(picks = state.ledger().len(), "Listing picks");
    let picks: Vec<PickInfo> = state
        .picks()
        .into_iter()
        .map(|(pick_index, pick)| pick_info(pick, pick_index))
        .collect::<Result<_, _>>()?;
    Ok(ListPicksResponse { picks })
}

/// Describes whose turn it is.
#[must_use]
pub fn current_turn(state: &State) -> TurnResponse {
    TurnResponse {
        turn_order_enabled: state.policy().turn_order_enabled,
        current: state.current_turn().map(|a| a.name().to_string()),
        rotation_index: state.rotation().position(state.roster().len()),
    }
}

/// Moves the rotation to the next agent.
///
/// # Errors
///
/// Returns an error only if the core reports an unexpected outcome.
pub fn advance_rotation(state: &State) -> Result<ApiResult<TurnResponse>, ApiError> {
    move_rotation(state, Command::AdvanceRotation)
}

/// Moves the rotation back to the previous agent.
///
/// # Errors
///
/// Returns an error only if the core reports an unexpected outcome.
pub fn retreat_rotation(state: &State) -> Result<ApiResult<TurnResponse>, ApiError> {
    move_rotation(state, Command::RetreatRotation)
}

fn move_rotation(state: &State, command: Command) -> Result<ApiResult<TurnResponse>, ApiError> {
    let transition: TransitionResult = apply(state, command).map_err(translate_core_error)?;
    let Outcome::RotationMoved(current) = &transition.outcome else {
        return Err(unexpected_outcome(&transition.outcome));
    };
    info!(
        current = current.as_ref().map_or("none", Agent::name),
        "Rotation moved"
    );
    Ok(ApiResult {
        response: current_turn(&transition.new_state),
        new_state: transition.new_state,
    })
}

/// Replaces the policy wholesale.
///
/// Existing picks are kept even if they now exceed the new limits; their
/// seasonal flags follow the new window.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a policy field is out of range.
pub fn replace_policy(
    state: &State,
    policy: Policy,
) -> Result<ApiResult<ReplacePolicyResponse>, ApiError> {
    let transition: TransitionResult =
        apply(state, Command::ReplacePolicy(policy)).map_err(|err| {
            warn!(error = %err, "Policy replacement refused");
            translate_core_error(err)
        })?;
    info!(
        max_days = transition.new_state.policy().max_days_per_agent,
        max_picks = transition.new_state.policy().max_picks_per_agent,
        max_off = transition.new_state.policy().max_agents_off_per_day,
        turn_order = transition.new_state.policy().turn_order_enabled,
        "Policy replaced"
    );
    Ok(ApiResult {
        response: ReplacePolicyResponse {
            policy: transition.new_state.policy().clone(),
            message: String::from("Policy replaced"),
        },
        new_state: transition.new_state,
    })
}

/// Serializes the state as a snapshot document.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the snapshot cannot be rendered.
pub fn export_snapshot(state: &State) -> Result<String, ApiError> {
    let snapshot: Snapshot = Snapshot::capture(state).map_err(translate_core_error)?;
    let json: String = serde_json::to_string_pretty(&snapshot).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialize snapshot: {e}"),
    })?;
    debug!(bytes = json.len(), "Exported snapshot");
    Ok(json)
}

/// Rebuilds a state from a snapshot document.
///
/// # Arguments
///
/// * `json` - The snapshot document
/// * `mode` - Whether a schedule that disagrees with the picks is refused or rebuilt
///
/// # Errors
///
/// Returns `ApiError::CorruptState` if the document is malformed or does
/// not describe a consistent state.
pub fn import_snapshot(json: &str, mode: LoadMode) -> Result<State, ApiError> {
    let snapshot: Snapshot = serde_json::from_str(json).map_err(|e| ApiError::CorruptState {
        message: format!("Malformed snapshot: {e}"),
    })?;
    let state: State = snapshot.restore(mode).map_err(|err: CoreError| {
        warn!(error = %err, ?mode, "Snapshot import refused");
        translate_core_error(err)
    })?;
    info!(
        agents = state.roster().len(),
        picks = state.ledger().len(),
        ?mode,
        "Imported snapshot"
    );
    Ok(state)
}

fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_iso_date(s)
            .map(Some)
            .map_err(|e| ApiError::InvalidInput {
                field: field.to_string(),
                message: e.to_string(),
            }),
    }
}

fn pick_info(pick: &Pick, pick_index: usize) -> Result<PickInfo, ApiError> {
    Ok(PickInfo {
        agent: pick.agent.name().to_string(),
        pick_index,
        start: format_iso_date(pick.range.start()).map_err(translate_domain_error)?,
        end: format_iso_date(pick.range.end()).map_err(translate_domain_error)?,
        days: pick.day_count,
        seasonal: pick.is_seasonal,
    })
}

fn unexpected_outcome(outcome: &Outcome) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected outcome: {outcome:?}"),
    }
}
