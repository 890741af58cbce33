// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross this boundary as `YYYY-MM-DD` strings and agents as their
//! display names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vacation_pick_domain::Policy;

/// API request to propose a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposePickRequest {
    /// The proposing agent's name.
    pub agent: String,
    /// The first day (`YYYY-MM-DD`). Missing or blank is a rejected range.
    #[serde(default)]
    pub start: Option<String>,
    /// The last day (`YYYY-MM-DD`, inclusive). Missing or blank is a rejected range.
    #[serde(default)]
    pub end: Option<String>,
}

/// API response for an accepted pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposePickResponse {
    /// The committed pick.
    pub pick: PickInfo,
    /// The agent whose turn it now is, when turn order is enforced.
    pub next_turn: Option<String>,
    /// A success message.
    pub message: String,
}

/// API request to withdraw a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawPickRequest {
    /// The agent holding the pick.
    pub agent: String,
    /// Index into the agent's picks, in commit order.
    pub pick_index: usize,
}

/// API response for a withdrawn pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawPickResponse {
    /// The pick that was removed. Its index is the one it held before removal.
    pub pick: PickInfo,
    /// A success message.
    pub message: String,
}

/// A pick as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickInfo {
    /// The agent holding the pick.
    pub agent: String,
    /// Index into the agent's picks, in commit order.
    pub pick_index: usize,
    /// First day (`YYYY-MM-DD`).
    pub start: String,
    /// Last day (`YYYY-MM-DD`, inclusive).
    pub end: String,
    /// Inclusive day count.
    pub days: u32,
    /// Whether the pick touches the seasonal window.
    pub seasonal: bool,
}

/// API response listing every pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPicksResponse {
    /// Picks in roster order, then commit order.
    pub picks: Vec<PickInfo>,
}

/// One agent's usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummaryInfo {
    /// The agent's name.
    pub agent: String,
    /// Days used across all picks.
    pub used_days: u32,
    /// Days left in the budget.
    pub remaining_days: u32,
    /// Picks held.
    pub pick_count: u32,
    /// Picks touching the seasonal window.
    pub seasonal_pick_count: u32,
}

/// API response for agent summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummariesResponse {
    /// One summary per agent, in roster order.
    pub summaries: Vec<AgentSummaryInfo>,
}

/// API response for the schedule index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Agents off per date (`YYYY-MM-DD`), ascending.
    pub schedule: BTreeMap<String, Vec<String>>,
}

/// API response describing the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResponse {
    /// Whether proposals must follow the rotation.
    pub turn_order_enabled: bool,
    /// The agent whose turn it is; absent for an empty roster.
    pub current: Option<String>,
    /// The normalized roster position.
    pub rotation_index: Option<usize>,
}

/// API response for a policy replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacePolicyResponse {
    /// The policy now in force.
    pub policy: Policy,
    /// A success message.
    pub message: String,
}
