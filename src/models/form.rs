//! Submitted workout form payload.
//!
//! The input collaborator coerces raw fields to numbers before handing the
//! draft over; the core still runs its own semantic validation (positivity,
//! finiteness) regardless of upstream checks.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::workout::{Sport, WorkoutRecord};

/// A submitted workout: the tuple a form submission produces.
///
/// Also serves as the prefill payload when an edit begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkoutDraft {
    /// Kind plus its kind-specific value (cadence or elevation gain)
    #[validate(custom(function = sport_value_positive_finite))]
    pub sport: Sport,
    #[validate(custom(function = positive_finite))]
    pub distance_km: f64,
    #[validate(custom(function = positive_finite))]
    pub duration_min: f64,
}

impl WorkoutDraft {
    pub fn new(sport: Sport, distance_km: f64, duration_min: f64) -> Self {
        Self {
            sport,
            distance_km,
            duration_min,
        }
    }

    /// Form prefill from an existing record's current values.
    pub fn prefill(record: &WorkoutRecord) -> Self {
        Self {
            sport: record.sport,
            distance_km: record.distance_km,
            duration_min: record.duration_min,
        }
    }
}

fn positive_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("positive_finite"))
    }
}

/// The error code carries the concrete field name so `InvalidInput` can
/// point at cadence or elevation rather than the enclosing enum.
fn sport_value_positive_finite(sport: &Sport) -> Result<(), ValidationError> {
    let field = match sport {
        Sport::Running { .. } => "cadence_spm",
        Sport::Cycling { .. } => "elevation_gain_m",
    };
    let value = sport.value();
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_passes() {
        let draft = WorkoutDraft::new(Sport::Running { cadence_spm: 150.0 }, 5.0, 25.0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_zero_distance_fails() {
        let draft = WorkoutDraft::new(Sport::Running { cadence_spm: 150.0 }, 0.0, 25.0);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_non_finite_duration_fails() {
        let draft = WorkoutDraft::new(Sport::Running { cadence_spm: 150.0 }, 5.0, f64::NAN);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_negative_elevation_fails() {
        let draft = WorkoutDraft::new(
            Sport::Cycling {
                elevation_gain_m: -10.0,
            },
            27.0,
            95.0,
        );
        assert!(draft.validate().is_err());
    }
}
