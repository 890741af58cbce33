// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allocation policy.
//!
//! A `Policy` is the single source of every quota the validation rules
//! consult. It is a plain value: the engine never mutates it, and an
//! administrator replaces it wholesale between operations.
//!
//! ## Defaults
//!
//! Any field missing from a serialized policy takes its default:
//!
//! | Field                | Default         |
//! |----------------------|-----------------|
//! | `maxDaysPerAgent`    | 24              |
//! | `maxPicksPerAgent`   | 6               |
//! | `seasonalWindow`     | Jun 21 - Sep 3  |
//! | `seasonalCap`        | 2               |
//! | `maxAgentsOffPerDay` | 1               |
//! | `blackoutRanges`     | none            |
//! | `turnOrderEnabled`   | false           |

use crate::calendar::{SeasonalWindow, ranges_overlap};
use crate::error::DomainError;
use crate::types::DateRange;
use serde::{Deserialize, Serialize};

/// Default per-agent day budget.
pub const DEFAULT_MAX_DAYS_PER_AGENT: u32 = 24;
/// Default per-agent pick count.
pub const DEFAULT_MAX_PICKS_PER_AGENT: u32 = 6;
/// Default number of seasonal picks per agent.
pub const DEFAULT_SEASONAL_CAP: u32 = 2;
/// Default number of agents that may be off on one date.
pub const DEFAULT_MAX_AGENTS_OFF_PER_DAY: u32 = 1;

/// Quota and capacity rules applied to every proposed pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Policy {
    /// Total days an agent may hold across all picks.
    pub max_days_per_agent: u32,
    /// Number of picks an agent may hold.
    pub max_picks_per_agent: u32,
    /// The recurring window subject to `seasonal_cap`.
    pub seasonal_window: SeasonalWindow,
    /// Number of picks per agent that may touch the seasonal window.
    pub seasonal_cap: u32,
    /// Number of agents that may be off on the same date.
    pub max_agents_off_per_day: u32,
    /// Ranges in which no pick may be placed.
    pub blackout_ranges: Vec<DateRange>,
    /// Whether agents must pick in roster order.
    pub turn_order_enabled: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_days_per_agent: DEFAULT_MAX_DAYS_PER_AGENT,
            max_picks_per_agent: DEFAULT_MAX_PICKS_PER_AGENT,
            seasonal_window: SeasonalWindow::default(),
            seasonal_cap: DEFAULT_SEASONAL_CAP,
            max_agents_off_per_day: DEFAULT_MAX_AGENTS_OFF_PER_DAY,
            blackout_ranges: Vec::new(),
            turn_order_enabled: false,
        }
    }
}

impl Policy {
    /// Validates every field against its permitted domain.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `maxDaysPerAgent` or `maxPicksPerAgent` is zero
    /// - `maxAgentsOffPerDay` is zero
    /// - Either seasonal window bound is not a calendar day
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_days_per_agent == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "maxDaysPerAgent",
                reason: String::from("must be greater than 0"),
            });
        }
        if self.max_picks_per_agent == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "maxPicksPerAgent",
                reason: String::from("must be greater than 0"),
            });
        }
        if self.max_agents_off_per_day == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "maxAgentsOffPerDay",
                reason: String::from("must be at least 1"),
            });
        }
        self.seasonal_window
            .start
            .validate()
            .and_then(|()| self.seasonal_window.end.validate())
            .map_err(|e| DomainError::InvalidPolicy {
                field: "seasonalWindow",
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Returns the first blackout range that overlaps `range`, if any.
    #[must_use]
    pub fn blackout_overlapping(&self, range: &DateRange) -> Option<&DateRange> {
        self.blackout_ranges
            .iter()
            .find(|blackout| ranges_overlap(blackout, range))
    }
}
