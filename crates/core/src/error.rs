// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rejection::Rejection;
use vacation_pick_domain::DomainError;

/// Errors that can occur during state transitions and snapshot handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A pick rule refused the operation. State is unchanged.
    Rejected(Rejection),
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Loaded data does not describe a consistent state.
    CorruptState {
        /// What was found to be inconsistent.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "Rejected ({}): {rejection}", rejection.code()),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CorruptState { reason } => write!(f, "Corrupt state: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<Rejection> for CoreError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}
