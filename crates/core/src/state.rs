// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::allocation::rebuild_index;
use crate::ledger::PickLedger;
use crate::rotation::Rotation;
use crate::schedule::ScheduleIndex;
use crate::summary::AgentSummary;
use vacation_pick_domain::{Agent, Pick, Policy, Roster};

/// The complete engine context.
///
/// Every engine operation receives the state explicitly. The ledger, the
/// schedule index and the rotation are only changed through
/// [`crate::commit`], [`crate::remove`] and [`crate::apply`], which keep
/// them consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(crate) roster: Roster,
    pub(crate) policy: Policy,
    pub(crate) ledger: PickLedger,
    pub(crate) schedule: ScheduleIndex,
    pub(crate) rotation: Rotation,
}

impl State {
    /// Creates a state with no picks and the rotation at the first agent.
    ///
    /// # Arguments
    ///
    /// * `roster` - The ordered agents
    /// * `policy` - The rules applied to proposals
    #[must_use]
    pub const fn new(roster: Roster, policy: Policy) -> Self {
        Self {
            roster,
            policy,
            ledger: PickLedger::new(),
            schedule: ScheduleIndex::new(),
            rotation: Rotation::new(0),
        }
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns the pick ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PickLedger {
        &self.ledger
    }

    /// Returns the live schedule index.
    #[must_use]
    pub const fn schedule(&self) -> &ScheduleIndex {
        &self.schedule
    }

    /// Returns the rotation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the agent whose turn it is, if the roster is not empty.
    #[must_use]
    pub fn current_turn(&self) -> Option<&Agent> {
        self.rotation.current(&self.roster)
    }

    /// Derives one agent's summary.
    #[must_use]
    pub fn summary(&self, agent: &Agent) -> AgentSummary {
        self.ledger.summary(agent, &self.policy)
    }

    /// Derives every agent's summary in roster order.
    #[must_use]
    pub fn summaries(&self) -> Vec<AgentSummary> {
        self.roster.iter().map(|agent| self.summary(agent)).collect()
    }

    /// Lists every pick in roster order, each with its per-agent index.
    #[must_use]
    pub fn picks(&self) -> Vec<(usize, &Pick)> {
        self.roster
            .iter()
            .flat_map(|agent| self.ledger.picks_for(agent).iter().enumerate())
            .collect()
    }

    /// Checks that the live schedule index matches a rebuild from the ledger.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        rebuild_index(&self.ledger) == self.schedule
    }
}
