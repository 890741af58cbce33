// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    agent_a, agent_b, agent_c, commit_ok, create_test_state, create_test_state_with, date,
};
use crate::{Command, CoreError, Outcome, Rejection, State, TransitionResult, apply};
use time::Month;
use vacation_pick_domain::{DomainError, MonthDay, Pick, Policy, SeasonalWindow};

#[test]
fn test_propose_returns_new_state_with_pick() {
    let state: State = create_test_state();
    let command: Command = Command::ProposePick {
        agent: agent_a(),
        start: Some(date(2026, Month::July, 1)),
        end: Some(date(2026, Month::July, 3)),
    };

    let result: TransitionResult = apply(&state, command).unwrap();

    let Outcome::PickCommitted(pick) = result.outcome else {
        panic!("expected a committed pick");
    };
    assert_eq!(pick.day_count, 3);
    assert!(pick.is_seasonal);
    assert_eq!(result.new_state.ledger().len(), 1);
    assert!(result.new_state.is_consistent());
}

#[test]
fn test_input_state_is_never_modified() {
    let state: State = create_test_state();
    let before: State = state.clone();

    let _ = apply(
        &state,
        Command::ProposePick {
            agent: agent_a(),
            start: Some(date(2026, Month::July, 1)),
            end: Some(date(2026, Month::July, 3)),
        },
    )
    .unwrap();

    assert_eq!(state, before);
}

#[test]
fn test_rejection_surfaces_as_core_error() {
    let state: State = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::ProposePick {
            agent: agent_a(),
            start: None,
            end: Some(date(2026, Month::July, 3)),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::Rejected(Rejection::InvalidRange {
            start: None,
            end: Some(date(2026, Month::July, 3)),
        }))
    );
}

#[test]
fn test_repeated_rejection_is_identical() {
    let mut state: State = create_test_state();
    let day = date(2026, Month::March, 4);
    commit_ok(&mut state, agent_a(), day, day);
    let command: Command = Command::ProposePick {
        agent: agent_b(),
        start: Some(day),
        end: Some(day),
    };

    let first: Result<TransitionResult, CoreError> = apply(&state, command.clone());
    let second: Result<TransitionResult, CoreError> = apply(&state, command);

    assert!(first.is_err());
    assert_eq!(first, second);
}

#[test]
fn test_withdraw_returns_removed_pick() {
    let mut state: State = create_test_state();
    let pick: Pick = commit_ok(
        &mut state,
        agent_b(),
        date(2026, Month::May, 4),
        date(2026, Month::May, 5),
    );

    let result: TransitionResult = apply(
        &state,
        Command::WithdrawPick {
            agent: agent_b(),
            pick_index: 0,
        },
    )
    .unwrap();

    assert_eq!(result.outcome, Outcome::PickWithdrawn(pick));
    assert!(result.new_state.ledger().is_empty());
    assert!(result.new_state.schedule().is_empty());
}

#[test]
fn test_withdraw_missing_pick_is_not_found() {
    let state: State = create_test_state();

    assert_eq!(
        apply(
            &state,
            Command::WithdrawPick {
                agent: agent_a(),
                pick_index: 0,
            }
        ),
        Err(CoreError::Rejected(Rejection::NotFound {
            agent: agent_a(),
            pick_index: 0
        }))
    );
}

#[test]
fn test_advance_and_retreat_rotation() {
    let state: State = create_test_state();

    let advanced: TransitionResult = apply(&state, Command::AdvanceRotation).unwrap();
    assert_eq!(advanced.outcome, Outcome::RotationMoved(Some(agent_b())));

    let retreated: TransitionResult =
        apply(&advanced.new_state, Command::RetreatRotation).unwrap();
    assert_eq!(retreated.outcome, Outcome::RotationMoved(Some(agent_a())));

    let wrapped: TransitionResult = apply(&state, Command::RetreatRotation).unwrap();
    assert_eq!(wrapped.outcome, Outcome::RotationMoved(Some(agent_c())));
}

#[test]
fn test_replace_policy_rejects_invalid_policy() {
    let state: State = create_test_state();
    let policy: Policy = Policy {
        max_agents_off_per_day: 0,
        ..Policy::default()
    };

    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::ReplacePolicy(policy));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidPolicy {
            field: "maxAgentsOffPerDay",
            ..
        }))
    ));
}

#[test]
fn test_replace_policy_keeps_existing_picks() {
    let mut state: State = create_test_state_with(Policy {
        max_days_per_agent: 20,
        ..Policy::default()
    });
    commit_ok(
        &mut state,
        agent_a(),
        date(2026, Month::March, 1),
        date(2026, Month::March, 15),
    );
    let policy: Policy = Policy {
        max_days_per_agent: 5,
        ..Policy::default()
    };

    let result: TransitionResult = apply(&state, Command::ReplacePolicy(policy.clone())).unwrap();

    assert_eq!(result.outcome, Outcome::PolicyReplaced);
    assert_eq!(result.new_state.policy(), &policy);
    assert_eq!(result.new_state.ledger().len(), 1);
    assert_eq!(result.new_state.summary(&agent_a()).remaining_days, 0);
}

#[test]
fn test_replace_policy_recomputes_seasonal_flags() {
    let mut state: State = create_test_state();
    commit_ok(
        &mut state,
        agent_a(),
        date(2026, Month::December, 21),
        date(2026, Month::December, 23),
    );
    let winter: SeasonalWindow =
        SeasonalWindow::new(MonthDay::new(12, 15).unwrap(), MonthDay::new(1, 5).unwrap());

    let result: TransitionResult = apply(
        &state,
        Command::ReplacePolicy(Policy {
            seasonal_window: winter,
            ..Policy::default()
        }),
    )
    .unwrap();

    assert!(result.new_state.ledger().picks_for(&agent_a())[0].is_seasonal);
    assert_eq!(result.new_state.summary(&agent_a()).seasonal_pick_count, 1);
}
