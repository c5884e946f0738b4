// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The workout collection: the authoritative list of workout records and
//! their 1:1 association with map markers.
//!
//! Invariants owned here:
//! - ids are unique across the live collection and never reused
//! - every live record has exactly one marker binding, and vice versa
//! - the derived metric is never stale after a create or edit
//! - a rejected operation leaves prior state completely unchanged

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use chrono::Utc;
use geo::{BoundingRect, MultiPoint, Point, Rect};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::map::WorkoutMap;
use crate::models::form::WorkoutDraft;
use crate::models::marker::MarkerBinding;
use crate::models::workout::{Coordinates, Sport, WorkoutId, WorkoutRecord};
use crate::services::metrics;

/// Sort key for the workout list. Ascending only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Distance,
    Duration,
    /// Compares each workout's own derived metric: pace (min/km) for
    /// running against speed (km/h) for cycling, with no unit
    /// reconciliation. Intentional; this reproduces the product's current
    /// behavior for mixed-kind lists.
    Speed,
    /// Compares sport names lexicographically ("cycling" < "running").
    Type,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "distance" => Ok(SortKey::Distance),
            "duration" => Ok(SortKey::Duration),
            "speed" => Ok(SortKey::Speed),
            "type" => Ok(SortKey::Type),
            _ => Err(UnknownSortKey(raw.to_string())),
        }
    }
}

/// Owns the ordered set of workout records plus the parallel set of marker
/// bindings, and the map port they are mirrored through.
///
/// Records live in an id-indexed map; display order is kept separately as
/// an explicit ordered sequence of ids.
pub struct WorkoutCollection {
    map: Box<dyn WorkoutMap>,
    records: HashMap<WorkoutId, WorkoutRecord>,
    bindings: HashMap<WorkoutId, MarkerBinding>,
    order: Vec<WorkoutId>,
    next_seq: u64,
}

impl WorkoutCollection {
    pub fn new(map: Box<dyn WorkoutMap>) -> Self {
        Self {
            map,
            records: HashMap::new(),
            bindings: HashMap::new(),
            order: Vec::new(),
            next_seq: 0,
        }
    }

    /// Create a workout at the given pin location.
    ///
    /// Appends to the end of the display order and places a marker through
    /// the map port. Rejects non-positive or non-finite numeric fields with
    /// `InvalidInput` before any state is touched.
    pub fn create(&mut self, coords: Coordinates, draft: WorkoutDraft) -> Result<&WorkoutRecord> {
        draft
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        let created_at = Utc::now();
        let id = WorkoutId::from_parts(created_at.timestamp_millis(), self.next_seq);
        self.next_seq += 1;

        let record = WorkoutRecord {
            id: id.clone(),
            created_at,
            coordinates: coords,
            sport: draft.sport,
            distance_km: draft.distance_km,
            duration_min: draft.duration_min,
            metric: derived_metric(&draft.sport, draft.distance_km, draft.duration_min),
            description: WorkoutRecord::description_for(&draft.sport, created_at),
            visits: 0,
        };

        let handle = self.map.create_marker(coords, &record.popup_text());
        self.bindings.insert(
            id.clone(),
            MarkerBinding {
                workout_id: id.clone(),
                handle,
            },
        );
        self.order.push(id.clone());

        tracing::info!(id = %id, sport = record.sport.name(), "workout created");
        Ok(self.records.entry(id).or_insert(record))
    }

    /// Edit an existing workout in place.
    ///
    /// Coordinates, id, creation time, and list position are untouched; the
    /// sport, numbers, derived metric, and description are replaced, and the
    /// existing marker's popup is updated (the marker is not recreated).
    /// Numeric preconditions are the same as for `create`.
    pub fn edit(&mut self, id: &WorkoutId, draft: WorkoutDraft) -> Result<&WorkoutRecord> {
        if !self.records.contains_key(id) {
            return Err(AppError::NotFound(id.clone()));
        }
        draft
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        record.sport = draft.sport;
        record.distance_km = draft.distance_km;
        record.duration_min = draft.duration_min;
        record.metric = derived_metric(&draft.sport, draft.distance_km, draft.duration_min);
        record.description = WorkoutRecord::description_for(&record.sport, record.created_at);

        if let Some(binding) = self.bindings.get(id) {
            self.map
                .update_marker_popup(binding.handle, &record.popup_text());
        }

        tracing::info!(id = %id, sport = record.sport.name(), "workout updated");
        Ok(record)
    }

    /// Delete a workout and its marker.
    ///
    /// The record and the binding leave together; one without the other must
    /// never be observable. Relative order of the remaining records is
    /// preserved.
    pub fn delete(&mut self, id: &WorkoutId) -> Result<()> {
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        if let Some(binding) = self.bindings.remove(id) {
            self.map.remove_marker(binding.handle);
        }
        self.order.retain(|other| other != id);

        tracing::info!(id = %id, sport = record.sport.name(), "workout deleted");
        Ok(())
    }

    /// Remove every workout and marker. Clearing an empty collection is a
    /// no-op, not an error.
    pub fn clear(&mut self) {
        if self.records.is_empty() {
            return;
        }
        for binding in self.bindings.values() {
            self.map.remove_marker(binding.handle);
        }
        self.bindings.clear();
        self.records.clear();
        self.order.clear();
        tracing::info!("all workouts cleared");
    }

    /// Stable, ascending, in-place sort of the display order. Marker
    /// bindings are untouched.
    pub fn sort(&mut self, key: SortKey) {
        let records = &self.records;
        self.order.sort_by(|a, b| {
            let (Some(a), Some(b)) = (records.get(a), records.get(b)) else {
                return Ordering::Equal;
            };
            match key {
                SortKey::Date => a.created_at.cmp(&b.created_at),
                SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
                SortKey::Duration => a.duration_min.total_cmp(&b.duration_min),
                SortKey::Speed => a.metric.total_cmp(&b.metric),
                SortKey::Type => a.sport.name().cmp(b.sport.name()),
            }
        });
        tracing::debug!(?key, "workouts sorted");
    }

    /// Register a visit: bump the interaction counter and recenter the map
    /// on the workout's pin.
    pub fn visit(&mut self, id: &WorkoutId) -> Result<&WorkoutRecord> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        record.visits += 1;
        self.map.focus(record.coordinates);
        tracing::debug!(id = %id, visits = record.visits, "workout visited");
        Ok(record)
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&WorkoutRecord> {
        self.records.get(id)
    }

    pub fn get(&self, id: &WorkoutId) -> Result<&WorkoutRecord> {
        self.find(id).ok_or_else(|| AppError::NotFound(id.clone()))
    }

    /// Records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Marker bindings, in no particular order.
    pub fn marker_bindings(&self) -> impl Iterator<Item = &MarkerBinding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bounding rectangle of every pin, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: Vec<Point<f64>> = self.iter().map(|w| Point::from(w.coordinates)).collect();
        MultiPoint::new(points).bounding_rect()
    }

    /// Pan/zoom the map so every pin is visible. No-op when empty.
    pub fn fit_all(&mut self) {
        let Some(bounds) = self.bounds() else { return };
        self.map.fit_bounds(bounds);
    }
}

fn derived_metric(sport: &Sport, distance_km: f64, duration_min: f64) -> f64 {
    match sport {
        Sport::Running { .. } => metrics::pace_min_per_km(distance_km, duration_min),
        Sport::Cycling { .. } => metrics::speed_km_per_h(distance_km, duration_min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parses_select_values() {
        assert_eq!("Date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!("distance".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert_eq!("Speed".parse::<SortKey>().unwrap(), SortKey::Speed);
        assert!("elevation".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_defaults_to_date() {
        assert_eq!(SortKey::default(), SortKey::Date);
    }
}
