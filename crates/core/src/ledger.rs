// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pick ledger: committed picks grouped by agent.
//!
//! The ledger is the source of truth. The schedule index and every agent
//! summary are derived from it.

use crate::summary::AgentSummary;
use std::collections::BTreeMap;
use vacation_pick_domain::{Agent, Pick, Policy, SeasonalWindow, range_intersects_seasonal_window};

/// Committed picks per agent, in commit order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickLedger {
    picks: BTreeMap<Agent, Vec<Pick>>,
}

impl PickLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            picks: BTreeMap::new(),
        }
    }

    /// Returns an agent's picks in commit order.
    #[must_use]
    pub fn picks_for(&self, agent: &Agent) -> &[Pick] {
        self.picks.get(agent).map_or(&[], Vec::as_slice)
    }

    /// Returns one of an agent's picks by index.
    #[must_use]
    pub fn get(&self, agent: &Agent, pick_index: usize) -> Option<&Pick> {
        self.picks.get(agent)?.get(pick_index)
    }

    /// Iterates every pick, grouped by agent.
    pub fn iter(&self) -> impl Iterator<Item = &Pick> {
        self.picks.values().flatten()
    }

    /// Returns the total number of picks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.values().map(Vec::len).sum()
    }

    /// Returns `true` if nobody holds a pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Derives an agent's summary under the given policy.
    #[must_use]
    pub fn summary(&self, agent: &Agent, policy: &Policy) -> AgentSummary {
        AgentSummary::from_picks(agent.clone(), self.picks_for(agent), policy)
    }

    /// Appends a pick under its agent.
    pub(crate) fn append(&mut self, pick: Pick) {
        self.picks.entry(pick.agent.clone()).or_default().push(pick);
    }

    /// Removes and returns one of an agent's picks.
    ///
    /// Later picks of the same agent shift down by one index. An agent left
    /// with no picks is dropped from the ledger.
    pub(crate) fn remove(&mut self, agent: &Agent, pick_index: usize) -> Option<Pick> {
        let picks: &mut Vec<Pick> = self.picks.get_mut(agent)?;
        if pick_index >= picks.len() {
            return None;
        }
        let removed: Pick = picks.remove(pick_index);
        if picks.is_empty() {
            self.picks.remove(agent);
        }
        Some(removed)
    }

    /// Recomputes every pick's seasonal flag against a new window.
    pub(crate) fn reclassify_seasonal(&mut self, window: &SeasonalWindow) {
        for pick in self.picks.values_mut().flatten() {
            pick.is_seasonal = range_intersects_seasonal_window(&pick.range, window);
        }
    }
}
