// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PickRequest, State, commit};
use time::{Date, Month};
use vacation_pick_domain::{Agent, DateRange, Pick, Policy, Roster};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn range(start: Date, end: Date) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub fn agent_a() -> Agent {
    Agent::new("Patrick Tristram")
}

pub fn agent_b() -> Agent {
    Agent::new("William Luikart")
}

pub fn agent_c() -> Agent {
    Agent::new("Alan Moreno")
}

pub fn create_test_roster() -> Roster {
    Roster::new(vec![agent_a(), agent_b(), agent_c()]).unwrap()
}

pub fn create_test_state() -> State {
    State::new(create_test_roster(), Policy::default())
}

pub fn create_test_state_with(policy: Policy) -> State {
    State::new(create_test_roster(), policy)
}

pub fn request(agent: Agent, start: Date, end: Date) -> PickRequest {
    PickRequest {
        agent,
        start: Some(start),
        end: Some(end),
    }
}

/// Commits a pick that the test expects to be accepted.
pub fn commit_ok(state: &mut State, agent: Agent, start: Date, end: Date) -> Pick {
    commit(state, &request(agent, start, end)).unwrap()
}
