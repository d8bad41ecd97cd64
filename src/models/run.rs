// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Run shape: a sport with a recorded track.

use geo::{BoundingRect, LineString};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::models::activity::{Activity, Distance, Time, Timed};
use crate::models::location::Position;
use crate::models::sport::{Sport, SportKind, Sporting};

/// Polyline precision used by Strava summary polylines.
pub const POLYLINE_PRECISION: u32 = 5;

/// A run: a sport plus the ordered positions it passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct Run {
    #[serde(flatten)]
    #[validate(nested)]
    pub sport: Sport,
    #[validate(nested)]
    pub track: Vec<Position>,
}

impl Run {
    /// Build a run straight from an activity; the kind is always [`SportKind::Run`].
    pub fn new(activity: Activity, distance: Distance, track: Vec<Position>) -> Self {
        activity.sport(SportKind::Run, distance).run(track)
    }

    /// Track as a line string (x = lon, y = lat).
    pub fn line_string(&self) -> LineString<f64> {
        self.track.iter().copied().map(geo::Coord::from).collect()
    }

    /// South-west and north-east corners of the track, if it has any points.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        self.line_string()
            .bounding_rect()
            .map(|rect| (Position::from(rect.min()), Position::from(rect.max())))
    }
}

/// Anything that is at least a run.
pub trait Tracked: Sporting {
    fn track(&self) -> &[Position];
}

impl<T: Tracked + ?Sized> Tracked for &T {
    fn track(&self) -> &[Position] {
        (**self).track()
    }
}

impl Timed for Run {
    fn start(&self) -> Time {
        self.sport.activity.start
    }

    fn stop(&self) -> Time {
        self.sport.activity.stop
    }
}

impl Sporting for Run {
    fn kind(&self) -> SportKind {
        self.sport.kind
    }

    fn distance(&self) -> Distance {
        self.sport.distance
    }
}

impl Tracked for Run {
    fn track(&self) -> &[Position] {
        &self.track
    }
}

impl AsRef<Activity> for Run {
    fn as_ref(&self) -> &Activity {
        &self.sport.activity
    }
}

impl AsRef<Sport> for Run {
    fn as_ref(&self) -> &Sport {
        &self.sport
    }
}

/// Decode an encoded polyline (Strava format, precision 5) into a track.
pub fn track_from_polyline(encoded: &str) -> Result<Vec<Position>, TrackError> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| TrackError::Decode(e.to_string()))?;
    Ok(line.coords().copied().map(Position::from).collect())
}

/// Encode a track as a polyline (Strava format, precision 5).
pub fn track_to_polyline(track: &[Position]) -> Result<String, TrackError> {
    polyline::encode_coordinates(
        track.iter().copied().map(geo::Coord::from),
        POLYLINE_PRECISION,
    )
    .map_err(|e| TrackError::Encode(e.to_string()))
}

/// Errors from track conversion.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Failed to decode polyline: {0}")]
    Decode(String),

    #[error("Failed to encode polyline: {0}")]
    Encode(String),
}
