// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Paceline: a map-pinned personal workout log.
//!
//! This crate provides the workout collection controller: an in-memory,
//! editable, sortable collection of running and cycling sessions, each
//! mirrored by exactly one map marker. Map rendering and list markup are
//! external collaborators behind the [`map::WorkoutMap`] and
//! [`render::WorkoutList`] traits.

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod render;
pub mod services;
pub mod time_utils;
