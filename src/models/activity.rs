// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! The narrowest activity shape: a start and a stop instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::models::sport::{Sport, SportKind};

/// An instant on the shared activity timeline (unit left to the caller).
pub type Time = f64;

/// A distance, in meters when it comes from Strava.
pub type Distance = f64;

/// Anything that has at least a start and a stop.
///
/// This is the minimal required-field interface every wider shape satisfies.
pub trait Timed {
    fn start(&self) -> Time;
    fn stop(&self) -> Time;
}

impl<T: Timed + ?Sized> Timed for &T {
    fn start(&self) -> Time {
        (**self).start()
    }

    fn stop(&self) -> Time {
        (**self).stop()
    }
}

/// A generic timed activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_interval"))]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct Activity {
    pub start: Time,
    pub stop: Time,
}

impl Activity {
    pub fn new(start: Time, stop: Time) -> Self {
        Self { start, stop }
    }

    /// Build an activity from UTC datetimes, measured in epoch seconds.
    pub fn from_datetimes(start: DateTime<Utc>, stop: DateTime<Utc>) -> Self {
        Self {
            start: start.timestamp_millis() as f64 / 1000.0,
            stop: stop.timestamp_millis() as f64 / 1000.0,
        }
    }

    /// Widen into a [`Sport`], copying this activity's fields.
    pub fn sport(self, kind: SportKind, distance: Distance) -> Sport {
        Sport {
            activity: self,
            kind,
            distance,
        }
    }
}

impl Timed for Activity {
    fn start(&self) -> Time {
        self.start
    }

    fn stop(&self) -> Time {
        self.stop
    }
}

impl AsRef<Activity> for Activity {
    fn as_ref(&self) -> &Activity {
        self
    }
}

fn validate_interval(activity: &Activity) -> Result<(), ValidationError> {
    if activity.stop < activity.start {
        let mut err = ValidationError::new("stop_before_start");
        err.message = Some("stop must not be earlier than start".into());
        return Err(err);
    }
    Ok(())
}
