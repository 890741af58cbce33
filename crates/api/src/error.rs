// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use vacation_pick::{CoreError, Rejection};
use vacation_pick_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A pick rule refused the request. State is unchanged.
    #[error("Rejected ({rule}): {message}")]
    Rejected {
        /// The stable name of the rule that refused the request.
        rule: String,
        /// A human-readable description of the rejection.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Loaded data does not describe a consistent state.
    #[error("Corrupt state: {message}")]
    CorruptState {
        /// What was found to be inconsistent.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a rejection into an API error.
#[must_use]
pub fn translate_rejection(rejection: &Rejection) -> ApiError {
    ApiError::Rejected {
        rule: rejection.code().to_string(),
        message: rejection.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("range"),
            message: err.to_string(),
        },
        DomainError::InvalidMonthDay { .. } => ApiError::InvalidInput {
            field: String::from("seasonalWindow"),
            message: err.to_string(),
        },
        DomainError::InvalidPolicy { field, reason } => ApiError::InvalidInput {
            field: field.to_string(),
            message: reason,
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::InvalidAgent(msg) => ApiError::InvalidInput {
            field: String::from("agent"),
            message: msg,
        },
        DomainError::DuplicateAgent(_) => ApiError::InvalidInput {
            field: String::from("agents"),
            message: err.to_string(),
        },
        DomainError::DateFormatError { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Rejected(rejection) => translate_rejection(&rejection),
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CorruptState { reason } => ApiError::CorruptState { message: reason },
    }
}
