// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use vacation_pick_domain::{Agent, Policy};

/// A command represents user or administrator intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Propose a new pick for an agent.
    ProposePick {
        /// The proposing agent.
        agent: Agent,
        /// The first day requested.
        start: Option<Date>,
        /// The last day requested (inclusive).
        end: Option<Date>,
    },
    /// Withdraw one of an agent's picks.
    WithdrawPick {
        /// The agent holding the pick.
        agent: Agent,
        /// Index into the agent's picks, in commit order.
        pick_index: usize,
    },
    /// Move the rotation to the next agent.
    AdvanceRotation,
    /// Move the rotation back to the previous agent.
    RetreatRotation,
    /// Replace the policy wholesale.
    ///
    /// Existing picks are kept even if they exceed the new limits; their
    /// seasonal flags are recomputed against the new window.
    ReplacePolicy(Policy),
}
