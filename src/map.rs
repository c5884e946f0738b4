// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapping collaborator port.
//!
//! The map (tiles, pan/zoom, marker visuals) is owned by an external
//! collaborator; the core only instructs it through this trait. Incoming
//! map clicks arrive as [`crate::services::controller::UiEvent::MapClicked`].

use geo::Rect;

use crate::models::marker::MarkerHandle;
use crate::models::workout::Coordinates;

/// Operations the collection needs from the map.
pub trait WorkoutMap {
    /// Place a marker with the given popup content and return its handle.
    fn create_marker(&mut self, coords: Coordinates, popup: &str) -> MarkerHandle;

    /// Replace the popup content of an existing marker in place.
    fn update_marker_popup(&mut self, handle: MarkerHandle, popup: &str);

    /// Remove a marker from the map.
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Recenter the view on the given coordinates.
    fn focus(&mut self, coords: Coordinates);

    /// Pan/zoom so the given bounding box is fully visible.
    fn fit_bounds(&mut self, bounds: Rect<f64>);
}
