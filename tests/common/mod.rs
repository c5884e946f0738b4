// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::cell::RefCell;
use std::rc::Rc;

use geo::Rect;
use paceline::map::WorkoutMap;
use paceline::models::{Coordinates, MarkerHandle, Sport, WorkoutDraft, WorkoutId};
use paceline::render::{ListEntry, WorkoutList};
use paceline::services::{Controller, WorkoutCollection};

/// Everything the fake map has been instructed to do.
#[derive(Debug, Default)]
pub struct MapLog {
    /// Markers currently on the map
    pub live: Vec<MarkerHandle>,
    /// Total markers ever created
    pub created: usize,
    /// Popup content passed at marker creation
    pub created_popups: Vec<String>,
    /// In-place popup updates
    pub popup_updates: Vec<(MarkerHandle, String)>,
    /// Recenter requests
    pub focused: Vec<Coordinates>,
    /// Fit-bounds requests
    pub fitted: Vec<Rect<f64>>,
}

/// Fake mapping collaborator that records every instruction.
pub struct RecordingMap {
    log: Rc<RefCell<MapLog>>,
    next_handle: u64,
}

impl RecordingMap {
    #[allow(dead_code)]
    pub fn new() -> (Self, Rc<RefCell<MapLog>>) {
        let log = Rc::new(RefCell::new(MapLog::default()));
        (
            Self {
                log: log.clone(),
                next_handle: 0,
            },
            log,
        )
    }
}

impl WorkoutMap for RecordingMap {
    fn create_marker(&mut self, _coords: Coordinates, popup: &str) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        let mut log = self.log.borrow_mut();
        log.live.push(handle);
        log.created += 1;
        log.created_popups.push(popup.to_string());
        handle
    }

    fn update_marker_popup(&mut self, handle: MarkerHandle, popup: &str) {
        self.log
            .borrow_mut()
            .popup_updates
            .push((handle, popup.to_string()));
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.log.borrow_mut().live.retain(|h| *h != handle);
    }

    fn focus(&mut self, coords: Coordinates) {
        self.log.borrow_mut().focused.push(coords);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.log.borrow_mut().fitted.push(bounds);
    }
}

/// What the fake list renderer currently displays.
#[derive(Debug, Default)]
pub struct ListLog {
    pub entries: Vec<ListEntry>,
    pub replace_all_calls: usize,
}

/// Fake list renderer mirroring the displayed entries.
pub struct RecordingList {
    log: Rc<RefCell<ListLog>>,
}

impl RecordingList {
    #[allow(dead_code)]
    pub fn new() -> (Self, Rc<RefCell<ListLog>>) {
        let log = Rc::new(RefCell::new(ListLog::default()));
        (Self { log: log.clone() }, log)
    }
}

impl WorkoutList for RecordingList {
    fn push_entry(&mut self, entry: &ListEntry) {
        self.log.borrow_mut().entries.push(entry.clone());
    }

    fn replace_entry(&mut self, entry: &ListEntry) {
        let mut log = self.log.borrow_mut();
        if let Some(slot) = log.entries.iter_mut().find(|e| e.id == entry.id) {
            *slot = entry.clone();
        }
    }

    fn remove_entry(&mut self, id: &WorkoutId) {
        self.log.borrow_mut().entries.retain(|e| &e.id != id);
    }

    fn replace_all(&mut self, entries: &[ListEntry]) {
        let mut log = self.log.borrow_mut();
        log.entries = entries.to_vec();
        log.replace_all_calls += 1;
    }
}

/// Collection wired to a recording map.
#[allow(dead_code)]
pub fn test_collection() -> (WorkoutCollection, Rc<RefCell<MapLog>>) {
    let (map, log) = RecordingMap::new();
    (WorkoutCollection::new(Box::new(map)), log)
}

/// Controller wired to recording collaborators.
#[allow(dead_code)]
pub fn test_controller() -> (Controller, Rc<RefCell<MapLog>>, Rc<RefCell<ListLog>>) {
    let (map, map_log) = RecordingMap::new();
    let (list, list_log) = RecordingList::new();
    let collection = WorkoutCollection::new(Box::new(map));
    (
        Controller::new(collection, Box::new(list)),
        map_log,
        list_log,
    )
}

#[allow(dead_code)]
pub fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates::new(lat, lng)
}

#[allow(dead_code)]
pub fn run_draft(distance_km: f64, duration_min: f64, cadence_spm: f64) -> WorkoutDraft {
    WorkoutDraft::new(Sport::Running { cadence_spm }, distance_km, duration_min)
}

#[allow(dead_code)]
pub fn ride_draft(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> WorkoutDraft {
    WorkoutDraft::new(Sport::Cycling { elevation_gain_m }, distance_km, duration_min)
}
