// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration: the roster and the policy a fresh `State` starts
//! from.
//!
//! ```json
//! { "agents": ["Patrick Tristram", "William Luikart"], "policy": { "maxAgentsOffPerDay": 2 } }
//! ```
//!
//! Missing policy fields take their defaults.

use crate::error::{ApiError, translate_domain_error};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vacation_pick::State;
use vacation_pick_domain::{Policy, Roster};

/// The roster used when no configuration is supplied.
pub const DEFAULT_AGENTS: [&str; 6] = [
    "Patrick Tristram",
    "William Luikart",
    "Alan Moreno",
    "Nkosi Henry",
    "Brendan Combs",
    "John Nardella",
];

/// Roster and policy for a new engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Agent names in turn order.
    pub agents: Vec<String>,
    /// The allocation policy.
    #[serde(default)]
    pub policy: Policy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            agents: DEFAULT_AGENTS.iter().map(ToString::to_string).collect(),
            policy: Policy::default(),
        }
    }
}

impl EngineConfig {
    /// Builds an empty `State` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if:
    /// - The roster is empty
    /// - An agent name is blank or repeated
    /// - A policy field is out of range
    pub fn into_state(self) -> Result<State, ApiError> {
        if self.agents.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("agents"),
                message: String::from("at least one agent is required"),
            });
        }
        let roster: Roster = Roster::from_names(&self.agents).map_err(translate_domain_error)?;
        self.policy.validate().map_err(translate_domain_error)?;
        debug!(agents = roster.len(), "Built state from configuration");
        Ok(State::new(roster, self.policy))
    }
}

/// Parses a configuration document.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the document is not valid JSON of
/// the expected shape.
pub fn load_config(json: &str) -> Result<EngineConfig, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::InvalidInput {
        field: String::from("config"),
        message: e.to_string(),
    })
}

/// Parses and validates a policy document.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the document is malformed or a
/// field is out of range.
pub fn load_policy(json: &str) -> Result<Policy, ApiError> {
    let policy: Policy = serde_json::from_str(json).map_err(|e| ApiError::InvalidInput {
        field: String::from("policy"),
        message: e.to_string(),
    })?;
    policy.validate().map_err(translate_domain_error)?;
    Ok(policy)
}
