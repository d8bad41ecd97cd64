// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::Time;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Interpret an activity instant as epoch seconds.
///
/// Returns `None` when the value is not finite or out of chrono's range.
pub fn from_epoch_seconds(time: Time) -> Option<DateTime<Utc>> {
    if !time.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((time * 1000.0).round() as i64)
}
