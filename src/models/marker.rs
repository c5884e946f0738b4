// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Marker binding model: the association between a workout and its on-map
//! marker.

use crate::models::workout::WorkoutId;

/// Opaque handle to a marker owned by the mapping collaborator.
///
/// The binding holds a non-owning reference; the collection only instructs
/// the collaborator to create, update, or remove the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub fn new(raw: u64) -> Self {
        MarkerHandle(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Links a workout record to exactly one map marker.
#[derive(Debug, Clone)]
pub struct MarkerBinding {
    /// The owning workout's id
    pub workout_id: WorkoutId,
    /// Handle issued by the mapping collaborator
    pub handle: MarkerHandle,
}
