// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event dispatch: wires external UI events to collection operations.
//!
//! The controller is deliberately thin. It owns the collection, the edit
//! session, the last map-click coordinates, and the injected list renderer;
//! every event either completes fully or fails with no partial mutation.

use crate::error::{AppError, Result};
use crate::models::form::WorkoutDraft;
use crate::models::workout::{Coordinates, WorkoutId};
use crate::render::{ListEntry, WorkoutList};
use crate::services::collection::{SortKey, WorkoutCollection};
use crate::services::session::EditSession;

/// External events the controller dispatches on.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The map was clicked, supplying coordinates for the next create
    MapClicked(Coordinates),
    /// The workout form was submitted
    FormSubmitted(WorkoutDraft),
    /// The workout form was dismissed without submitting
    FormCancelled,
    /// "Edit" was pressed on a list entry
    EditRequested(WorkoutId),
    /// "Delete" was pressed on a list entry
    DeleteRequested(WorkoutId),
    /// A list entry was clicked (recenter on its pin)
    WorkoutSelected(WorkoutId),
    /// The sort selector changed
    SortChanged(SortKey),
    /// "Delete all" was confirmed
    ClearAll,
    /// "View all" was pressed
    ViewAll,
}

/// What a successfully dispatched event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    LocationSelected(Coordinates),
    Created(WorkoutId),
    Updated(WorkoutId),
    /// An edit began; `prefill` holds the record's current values for the
    /// form.
    EditStarted {
        id: WorkoutId,
        prefill: WorkoutDraft,
    },
    EditCancelled,
    Deleted(WorkoutId),
    Focused(WorkoutId),
    Sorted(SortKey),
    Cleared,
    ViewShowsAll,
}

pub struct Controller {
    collection: WorkoutCollection,
    session: EditSession,
    pending_location: Option<Coordinates>,
    list: Box<dyn WorkoutList>,
}

impl Controller {
    pub fn new(collection: WorkoutCollection, list: Box<dyn WorkoutList>) -> Self {
        Self {
            collection,
            session: EditSession::default(),
            pending_location: None,
            list,
        }
    }

    /// Read access to the collection.
    pub fn workouts(&self) -> &WorkoutCollection {
        &self.collection
    }

    /// Dispatch one external event. Errors are returned to the caller,
    /// never swallowed here.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Outcome> {
        match event {
            UiEvent::MapClicked(coords) => {
                self.pending_location = Some(coords);
                Ok(Outcome::LocationSelected(coords))
            }
            UiEvent::FormSubmitted(draft) => self.submit(draft),
            UiEvent::FormCancelled => {
                self.session.finish();
                Ok(Outcome::EditCancelled)
            }
            UiEvent::EditRequested(id) => {
                let record = self.collection.get(&id)?;
                let prefill = WorkoutDraft::prefill(record);
                self.session.begin(id.clone());
                Ok(Outcome::EditStarted { id, prefill })
            }
            UiEvent::DeleteRequested(id) => {
                self.collection.delete(&id)?;
                // A delete invalidates an in-flight edit of the same
                // workout; the session must not keep pointing at it.
                if self.session.is_editing(&id) {
                    self.session.finish();
                }
                self.list.remove_entry(&id);
                Ok(Outcome::Deleted(id))
            }
            UiEvent::WorkoutSelected(id) => {
                self.collection.visit(&id)?;
                Ok(Outcome::Focused(id))
            }
            UiEvent::SortChanged(key) => {
                self.collection.sort(key);
                // Reordering requires a full redraw so the displayed list
                // and the collection order stay in lockstep.
                let entries = self.entries();
                self.list.replace_all(&entries);
                Ok(Outcome::Sorted(key))
            }
            UiEvent::ClearAll => {
                self.collection.clear();
                self.session.finish();
                self.pending_location = None;
                self.list.replace_all(&[]);
                Ok(Outcome::Cleared)
            }
            UiEvent::ViewAll => {
                self.collection.fit_all();
                Ok(Outcome::ViewShowsAll)
            }
        }
    }

    /// Route a submission by edit-session state: `Editing` commits an edit,
    /// `Idle` creates at the last map-click location.
    fn submit(&mut self, draft: WorkoutDraft) -> Result<Outcome> {
        match self.session.clone() {
            EditSession::Editing(id) => {
                let entry = ListEntry::from(self.collection.edit(&id, draft)?);
                // Only a committed edit returns the session to idle; a
                // rejected draft keeps the edit in progress.
                self.session.finish();
                self.list.replace_entry(&entry);
                Ok(Outcome::Updated(id))
            }
            EditSession::Idle => {
                let coords = self.pending_location.ok_or(AppError::NoLocationSelected)?;
                let entry = ListEntry::from(self.collection.create(coords, draft)?);
                let id = entry.id.clone();
                self.list.push_entry(&entry);
                Ok(Outcome::Created(id))
            }
        }
    }

    fn entries(&self) -> Vec<ListEntry> {
        self.collection.iter().map(ListEntry::from).collect()
    }
}
