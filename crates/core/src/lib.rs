// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod apply;
mod command;
mod error;
mod ledger;
mod rejection;
mod rotation;
mod schedule;
mod snapshot;
mod state;
mod summary;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocation::{commit, rebuild_index, remove};
pub use apply::{Outcome, TransitionResult, apply};
pub use command::Command;
pub use error::CoreError;
pub use ledger::PickLedger;
pub use rejection::Rejection;
pub use rotation::Rotation;
pub use schedule::ScheduleIndex;
pub use snapshot::{LoadMode, PickRecord, Snapshot};
pub use state::State;
pub use summary::AgentSummary;
pub use validation::{PickRequest, ValidatedPick, validate};
