// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List-rendering collaborator port.
//!
//! The core hands the renderer already-validated, already-typed payloads;
//! producing and removing the visual markup is entirely the renderer's job.

use serde::Serialize;

use crate::models::workout::{Sport, WorkoutId, WorkoutRecord};

/// Render payload for one list entry.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub description: String,
    /// "running" or "cycling"
    pub sport: &'static str,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Pace (min/km) for running, speed (km/h) for cycling
    pub metric: f64,
    pub metric_unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
}

impl From<&WorkoutRecord> for ListEntry {
    fn from(record: &WorkoutRecord) -> Self {
        let (cadence_spm, elevation_gain_m) = match record.sport {
            Sport::Running { cadence_spm } => (Some(cadence_spm), None),
            Sport::Cycling { elevation_gain_m } => (None, Some(elevation_gain_m)),
        };
        Self {
            id: record.id.clone(),
            description: record.description.clone(),
            sport: record.sport.name(),
            distance_km: record.distance_km,
            duration_min: record.duration_min,
            metric: record.metric,
            metric_unit: record.sport.metric_unit(),
            cadence_spm,
            elevation_gain_m,
        }
    }
}

/// Operations the controller needs from the list renderer.
pub trait WorkoutList {
    /// Append a new entry at the end of the list.
    fn push_entry(&mut self, entry: &ListEntry);

    /// Replace the entry with the same id in place.
    fn replace_entry(&mut self, entry: &ListEntry);

    /// Remove the entry with the given id.
    fn remove_entry(&mut self, id: &WorkoutId);

    /// Full redraw: the displayed list becomes exactly `entries`, in order.
    fn replace_all(&mut self, entries: &[ListEntry]);
}
