// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paceline terminal front-end.
//!
//! Stands in for the browser UI: a line-command loop plays the form and the
//! selection events, and console adapters play the map and the list.

use std::io::{self, BufRead};

use anyhow::Context;
use geo::Rect;
use paceline::config::Config;
use paceline::map::WorkoutMap;
use paceline::models::{Coordinates, MarkerHandle, Sport, WorkoutDraft, WorkoutId};
use paceline::render::{ListEntry, WorkoutList};
use paceline::services::{Controller, Outcome, SortKey, UiEvent, WorkoutCollection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::info!(zoom = config.map_zoom, "starting paceline");

    let map = ConsoleMap::new(&config);
    let collection = WorkoutCollection::new(Box::new(map));
    let mut controller = Controller::new(collection, Box::new(ConsoleList));

    println!("paceline: type 'help' for commands");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if !handle_line(&mut controller, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Console stand-in for the mapping collaborator.
struct ConsoleMap {
    next_handle: u64,
}

impl ConsoleMap {
    fn new(config: &Config) -> Self {
        println!(
            "🗺  map centered at ({:.4}, {:.4}), zoom {}",
            config.fallback_center.lat, config.fallback_center.lng, config.map_zoom
        );
        Self { next_handle: 0 }
    }
}

impl WorkoutMap for ConsoleMap {
    fn create_marker(&mut self, coords: Coordinates, popup: &str) -> MarkerHandle {
        let handle = MarkerHandle::new(self.next_handle);
        self.next_handle += 1;
        println!("📍 {} at ({:.4}, {:.4})", popup, coords.lat, coords.lng);
        handle
    }

    fn update_marker_popup(&mut self, handle: MarkerHandle, popup: &str) {
        println!("📍 marker {} now reads: {}", handle.as_raw(), popup);
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        println!("🗑  marker {} removed", handle.as_raw());
    }

    fn focus(&mut self, coords: Coordinates) {
        println!("🎯 map centered at ({:.4}, {:.4})", coords.lat, coords.lng);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        println!(
            "🔍 view fits ({:.4}, {:.4})..({:.4}, {:.4})",
            bounds.min().y,
            bounds.min().x,
            bounds.max().y,
            bounds.max().x
        );
    }
}

/// Console stand-in for the list renderer.
struct ConsoleList;

impl WorkoutList for ConsoleList {
    fn push_entry(&mut self, entry: &ListEntry) {
        println!("+ {}", summary(entry));
    }

    fn replace_entry(&mut self, entry: &ListEntry) {
        println!("~ {}", summary(entry));
    }

    fn remove_entry(&mut self, id: &WorkoutId) {
        println!("- [{id}]");
    }

    fn replace_all(&mut self, entries: &[ListEntry]) {
        for entry in entries {
            println!("• {}", summary(entry));
        }
    }
}

fn summary(entry: &ListEntry) -> String {
    format!(
        "[{}] {}: {} km in {} min, {:.1} {}",
        entry.id,
        entry.description,
        entry.distance_km,
        entry.duration_min,
        entry.metric,
        entry.metric_unit
    )
}

/// Handle one input line. Returns false when the loop should stop.
fn handle_line(controller: &mut Controller, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let event = match tokens.as_slice() {
        [] => return true,
        ["quit"] | ["exit"] => return false,
        ["help"] => {
            print_help();
            return true;
        }
        ["list"] => {
            print_list(controller);
            return true;
        }
        ["click", lat, lng] => match (parse(lat), parse(lng)) {
            (Some(lat), Some(lng)) => UiEvent::MapClicked(Coordinates::new(lat, lng)),
            _ => return usage("click LAT LNG"),
        },
        ["run", km, min, spm] => match (parse(km), parse(min), parse(spm)) {
            (Some(km), Some(min), Some(cadence_spm)) => UiEvent::FormSubmitted(
                WorkoutDraft::new(Sport::Running { cadence_spm }, km, min),
            ),
            _ => return usage("run KM MIN CADENCE"),
        },
        ["ride", km, min, gain] => match (parse(km), parse(min), parse(gain)) {
            (Some(km), Some(min), Some(elevation_gain_m)) => UiEvent::FormSubmitted(
                WorkoutDraft::new(Sport::Cycling { elevation_gain_m }, km, min),
            ),
            _ => return usage("ride KM MIN ELEVATION"),
        },
        ["edit", id] => UiEvent::EditRequested(WorkoutId::from(*id)),
        ["cancel"] => UiEvent::FormCancelled,
        ["delete", id] => UiEvent::DeleteRequested(WorkoutId::from(*id)),
        ["open", id] => UiEvent::WorkoutSelected(WorkoutId::from(*id)),
        ["sort"] => UiEvent::SortChanged(SortKey::default()),
        ["sort", key] => match key.parse() {
            Ok(key) => UiEvent::SortChanged(key),
            Err(err) => {
                eprintln!("⚠️  {err}");
                return true;
            }
        },
        ["clear"] => UiEvent::ClearAll,
        ["fit"] => UiEvent::ViewAll,
        _ => {
            eprintln!("unknown command; type 'help'");
            return true;
        }
    };

    match controller.dispatch(event) {
        Ok(outcome) => report(outcome),
        // Stale-id errors are a silent no-op at the UI layer; everything
        // else is shown to the user.
        Err(err) if err.is_not_found() => {
            tracing::warn!(error = %err, "ignoring stale reference")
        }
        Err(err) => eprintln!("⚠️  {err}"),
    }
    true
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::LocationSelected(coords) => println!(
            "pin armed at ({:.4}, {:.4}); run/ride to log a workout",
            coords.lat, coords.lng
        ),
        Outcome::Created(id) => println!("logged workout {id}"),
        Outcome::Updated(id) => println!("updated workout {id}"),
        Outcome::EditStarted { id, prefill } => {
            let (verb, value) = match prefill.sport {
                Sport::Running { cadence_spm } => ("run", cadence_spm),
                Sport::Cycling { elevation_gain_m } => ("ride", elevation_gain_m),
            };
            println!(
                "editing {id}: submit `{verb} {} {} {}` to save, `cancel` to abort",
                prefill.distance_km, prefill.duration_min, value
            );
        }
        Outcome::EditCancelled => println!("edit cancelled"),
        Outcome::Deleted(id) => println!("deleted workout {id}"),
        Outcome::Focused(id) => println!("centered on workout {id}"),
        Outcome::Sorted(key) => println!("sorted by {key:?}"),
        Outcome::Cleared => println!("all workouts deleted"),
        Outcome::ViewShowsAll => {}
    }
}

fn print_list(controller: &Controller) {
    let entries: Vec<ListEntry> = controller.workouts().iter().map(ListEntry::from).collect();
    match serde_json::to_string_pretty(&entries) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("⚠️  {err}"),
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         click LAT LNG          drop a pin for the next workout\n  \
         run KM MIN CADENCE     log a running session at the pin\n  \
         ride KM MIN ELEVATION  log a cycling session at the pin\n  \
         edit ID                edit a workout (then submit run/ride)\n  \
         cancel                 abort an edit\n  \
         delete ID              delete a workout\n  \
         open ID                recenter the map on a workout\n  \
         sort [KEY]             sort by date|distance|duration|speed|type\n  \
         fit                    fit the view to every pin\n  \
         list                   dump the list as JSON\n  \
         clear                  delete all workouts\n  \
         quit"
    );
}

fn usage(msg: &str) -> bool {
    eprintln!("usage: {msg}");
    true
}

fn parse(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// Initialize logging with an env-controlled filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paceline=debug".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(format)
        .init();
}
