// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod form;
pub mod marker;
pub mod workout;

pub use form::WorkoutDraft;
pub use marker::{MarkerBinding, MarkerHandle};
pub use workout::{Coordinates, Sport, WorkoutId, WorkoutRecord};
