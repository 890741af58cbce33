// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Randomized checks that the ledger, the schedule index and the summaries
//! stay in agreement under any sequence of operations.

use super::helpers::{create_test_roster, date};
use crate::{AgentSummary, PickRequest, State, commit, rebuild_index, remove};
use proptest::prelude::*;
use time::{Date, Duration, Month};
use vacation_pick_domain::{Agent, Policy, Roster};

#[derive(Debug, Clone)]
enum Op {
    Propose {
        agent: usize,
        offset: i64,
        length: i64,
    },
    Withdraw {
        agent: usize,
        pick_index: usize,
    },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..4, 0i64..120, 0i64..6).prop_map(|(agent, offset, length)| Op::Propose {
            agent,
            offset,
            length,
        }),
        1 => (0usize..4, 0usize..4).prop_map(|(agent, pick_index)| Op::Withdraw {
            agent,
            pick_index,
        }),
    ]
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (1u32..4, any::<bool>()).prop_map(|(max_agents_off_per_day, turn_order_enabled)| Policy {
        max_days_per_agent: 20,
        max_picks_per_agent: 4,
        seasonal_cap: 1,
        max_agents_off_per_day,
        turn_order_enabled,
        ..Policy::default()
    })
}

/// Index 3 names an agent outside the roster.
fn agent_for(roster: &Roster, index: usize) -> Agent {
    roster
        .get(index)
        .cloned()
        .unwrap_or_else(|| Agent::new("Brendan Combs"))
}

fn run(state: &mut State, op: &Op) {
    let origin: Date = date(2026, Month::May, 1);
    match op {
        Op::Propose {
            agent,
            offset,
            length,
        } => {
            let start: Date = origin + Duration::days(*offset);
            let request: PickRequest = PickRequest {
                agent: agent_for(state.roster(), *agent),
                start: Some(start),
                end: Some(start + Duration::days(*length)),
            };
            let before: State = state.clone();
            if commit(state, &request).is_err() {
                assert_eq!(*state, before);
            }
        }
        Op::Withdraw { agent, pick_index } => {
            let agent: Agent = agent_for(state.roster(), *agent);
            let _ = remove(state, &agent, *pick_index);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The live index always equals a rebuild from the ledger.
    #[test]
    fn prop_index_matches_rebuild(
        policy in arb_policy(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut state: State = State::new(create_test_roster(), policy);
        for op in &ops {
            run(&mut state, op);
            prop_assert_eq!(&rebuild_index(state.ledger()), state.schedule());
        }
    }

    /// No date ever holds more agents than the policy allows, and nobody
    /// appears twice on a date.
    #[test]
    fn prop_capacity_never_exceeded(
        policy in arb_policy(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let limit: usize = usize::try_from(policy.max_agents_off_per_day).unwrap();
        let mut state: State = State::new(create_test_roster(), policy);
        for op in &ops {
            run(&mut state, op);
        }
        for (_, agents) in state.schedule() {
            prop_assert!(agents.len() <= limit);
        }
        for agent in state.roster() {
            let covered: usize = state
                .schedule()
                .iter()
                .filter(|(_, agents)| agents.contains(agent))
                .count();
            prop_assert_eq!(covered, usize::try_from(state.summary(agent).used_days).unwrap());
        }
    }

    /// Summaries always stay within the policy limits and agree with the ledger.
    #[test]
    fn prop_summaries_within_limits(
        policy in arb_policy(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut state: State = State::new(create_test_roster(), policy.clone());
        for op in &ops {
            run(&mut state, op);
        }
        let summaries: Vec<AgentSummary> = state.summaries();
        for summary in summaries {
            let held: u32 = state
                .ledger()
                .picks_for(&summary.agent)
                .iter()
                .map(|pick| pick.day_count)
                .sum();
            prop_assert_eq!(summary.used_days, held);
            prop_assert!(summary.used_days <= policy.max_days_per_agent);
            prop_assert!(summary.pick_count <= policy.max_picks_per_agent);
            prop_assert!(summary.seasonal_pick_count <= policy.seasonal_cap);
            prop_assert_eq!(summary.used_days + summary.remaining_days, policy.max_days_per_agent);
        }
    }
}
