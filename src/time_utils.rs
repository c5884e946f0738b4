// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date formatting.

use chrono::{DateTime, Datelike, Utc};

/// Format a UTC timestamp as "April 14" (full month name, unpadded day).
pub fn format_month_day(date: DateTime<Utc>) -> String {
    format!("{} {}", date.format("%B"), date.day())
}
