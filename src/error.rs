// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Every collection operation reports failures synchronously to its caller;
//! nothing is swallowed or retried inside the core. A rejected operation
//! leaves prior state completely unchanged.

use validator::ValidationErrors;

use crate::models::workout::WorkoutId;

/// Application error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// One or more numeric fields were non-positive or non-finite.
    #[error("invalid input: {}", fields.join(", "))]
    InvalidInput { fields: Vec<String> },

    /// The referenced workout is not in the live collection.
    ///
    /// Expected only from stale UI state; callers may treat it as a silent
    /// no-op, but the core always surfaces it.
    #[error("no workout with id {0}")]
    NotFound(WorkoutId),

    /// A create was attempted before any map click supplied coordinates.
    #[error("no location selected on the map")]
    NoLocationSelected,
}

impl AppError {
    /// Map validation failures to `InvalidInput`, naming the offending
    /// fields. Field names are sorted for deterministic reporting.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    // The sport payload validator stores the concrete field
                    // name (cadence_spm / elevation_gain_m) in the error code.
                    if *field == "sport" {
                        err.code.to_string()
                    } else {
                        field.to_string()
                    }
                })
            })
            .collect();
        fields.sort();
        fields.dedup();
        AppError::InvalidInput { fields }
    }

    /// True for errors that arise only from stale UI state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias for collection and controller operations.
pub type Result<T> = std::result::Result<T, AppError>;
