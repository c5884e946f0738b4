// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit session state machine.

use crate::models::workout::WorkoutId;

/// Whether a form submission commits a new workout or edits an existing one.
///
/// Exactly two states; there is no third. While `Editing(id)`, a submission
/// routes to `edit(id, ..)`; while `Idle`, to `create`. A tagged state
/// (rather than a boolean plus an index) means a stale edit target cannot
/// silently survive into a subsequent create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(WorkoutId),
}

impl EditSession {
    /// Start editing the given workout.
    pub fn begin(&mut self, id: WorkoutId) {
        *self = EditSession::Editing(id);
    }

    /// Return to idle, after a committed edit or an explicit cancel.
    pub fn finish(&mut self) {
        *self = EditSession::Idle;
    }

    /// The workout currently being edited, if any.
    pub fn editing(&self) -> Option<&WorkoutId> {
        match self {
            EditSession::Editing(id) => Some(id),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &WorkoutId) -> bool {
        self.editing() == Some(id)
    }
}
