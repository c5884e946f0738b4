// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod collection;
pub mod controller;
pub mod metrics;
pub mod session;

pub use collection::{SortKey, UnknownSortKey, WorkoutCollection};
pub use controller::{Controller, Outcome, UiEvent};
pub use session::EditSession;
