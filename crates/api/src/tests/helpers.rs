// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{EngineConfig, ProposePickRequest, WithdrawPickRequest, propose_pick};
use vacation_pick::State;
use vacation_pick_domain::Policy;

pub fn create_test_state() -> State {
    create_test_state_with(Policy::default())
}

pub fn create_test_state_with(policy: Policy) -> State {
    EngineConfig {
        agents: vec![
            String::from("Patrick Tristram"),
            String::from("William Luikart"),
            String::from("Alan Moreno"),
        ],
        policy,
    }
    .into_state()
    .unwrap()
}

pub fn propose_request(agent: &str, start: &str, end: &str) -> ProposePickRequest {
    ProposePickRequest {
        agent: agent.to_string(),
        start: Some(start.to_string()),
        end: Some(end.to_string()),
    }
}

pub fn withdraw_request(agent: &str, pick_index: usize) -> WithdrawPickRequest {
    WithdrawPickRequest {
        agent: agent.to_string(),
        pick_index,
    }
}

/// Proposes a pick the test expects to be accepted and returns the new state.
pub fn propose_ok(state: &State, agent: &str, start: &str, end: &str) -> State {
    propose_pick(state, &propose_request(agent, start, end))
        .unwrap()
        .new_state
}
