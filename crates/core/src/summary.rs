// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vacation_pick_domain::{Agent, Pick, Policy};

/// Per-agent usage derived from the ledger.
///
/// Summaries are recomputed on every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSummary {
    /// The agent summarized.
    pub agent: Agent,
    /// Sum of day counts over the agent's picks.
    pub used_days: u32,
    /// Days left in the budget, never below zero.
    pub remaining_days: u32,
    /// Number of picks held.
    pub pick_count: u32,
    /// Number of picks touching the seasonal window.
    pub seasonal_pick_count: u32,
}

impl AgentSummary {
    /// Derives a summary from an agent's picks.
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent summarized
    /// * `picks` - The agent's committed picks
    /// * `policy` - The policy supplying the day budget
    #[must_use]
    pub fn from_picks(agent: Agent, picks: &[Pick], policy: &Policy) -> Self {
        let used_days: u32 = picks
            .iter()
            .fold(0_u32, |acc, pick| acc.saturating_add(pick.day_count));
        let seasonal: usize = picks.iter().filter(|pick| pick.is_seasonal).count();

        Self {
            agent,
            used_days,
            remaining_days: policy.max_days_per_agent.saturating_sub(used_days),
            pick_count: u32::try_from(picks.len()).unwrap_or(u32::MAX),
            seasonal_pick_count: u32::try_from(seasonal).unwrap_or(u32::MAX),
        }
    }
}
