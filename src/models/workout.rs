// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model.

use std::fmt;

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// The kind of activity, carrying its kind-specific field.
///
/// Cadence only exists for running and elevation gain only for cycling, so
/// the payload lives on the variant and a mismatched pair cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "lowercase")]
pub enum Sport {
    Running {
        /// Cadence in steps per minute.
        cadence_spm: f64,
    },
    Cycling {
        /// Elevation gain in metres.
        elevation_gain_m: f64,
    },
}

impl Sport {
    /// Lowercase name, used for the lexicographic type sort and popup class.
    pub fn name(&self) -> &'static str {
        match self {
            Sport::Running { .. } => "running",
            Sport::Cycling { .. } => "cycling",
        }
    }

    /// Capitalized label for descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Sport::Running { .. } => "Running",
            Sport::Cycling { .. } => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sport::Running { .. } => "🏃‍♂️",
            Sport::Cycling { .. } => "🚴‍♀️",
        }
    }

    /// Unit of the derived metric: pace for running, speed for cycling.
    pub fn metric_unit(&self) -> &'static str {
        match self {
            Sport::Running { .. } => "min/km",
            Sport::Cycling { .. } => "km/h",
        }
    }

    /// The kind-specific value (cadence or elevation gain).
    pub fn value(&self) -> f64 {
        match self {
            Sport::Running { cadence_spm } => *cadence_spm,
            Sport::Cycling { elevation_gain_m } => *elevation_gain_m,
        }
    }
}

/// Opaque unique workout identifier.
///
/// Allocated at creation and never reused, even after the workout is
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Build an id from the creation timestamp and a collection-local
    /// sequence number. The sequence number keeps ids unique when two
    /// workouts land on the same millisecond.
    pub(crate) fn from_parts(timestamp_millis: i64, seq: u64) -> Self {
        WorkoutId(format!("{timestamp_millis}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(raw: &str) -> Self {
        WorkoutId(raw.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(raw: String) -> Self {
        WorkoutId(raw)
    }
}

/// Geographic coordinates of a workout pin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for Point<f64> {
    /// geo convention: x is longitude, y is latitude.
    fn from(coords: Coordinates) -> Self {
        Point::new(coords.lng, coords.lat)
    }
}

/// One logged activity session.
///
/// Identity (`id`, `created_at`, `coordinates`) is immutable; the remaining
/// fields are mutated only through the owning collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique id, assigned at creation
    pub id: WorkoutId,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Pin location; edits never move the pin
    pub coordinates: Coordinates,
    /// Activity kind with its kind-specific field
    pub sport: Sport,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Derived metric: pace (min/km) for running, speed (km/h) for cycling.
    /// Recomputed on every create/edit, never set directly.
    pub metric: f64,
    /// Human label, e.g. "Running on April 14"
    pub description: String,
    /// Times the user recentered the map on this workout
    pub visits: u32,
}

impl WorkoutRecord {
    /// Description derived from the sport label and creation date.
    pub fn description_for(sport: &Sport, created_at: DateTime<Utc>) -> String {
        format!(
            "{} on {}",
            sport.label(),
            time_utils::format_month_day(created_at)
        )
    }

    /// Marker popup content, e.g. "🏃‍♂️ Running on April 14".
    pub fn popup_text(&self) -> String {
        format!("{} {}", self.sport.icon(), self.description)
    }
}
