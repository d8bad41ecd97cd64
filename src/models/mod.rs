// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for timed activities.
//!
//! Shapes widen from [`Activity`] to [`Sport`] to [`Run`]. Each wider shape
//! embeds the narrower one and implements its capability traits, so generic
//! code written against [`Timed`] accepts any of them.

pub mod activity;
pub mod location;
pub mod run;
pub mod sport;

pub use activity::{Activity, Distance, Time, Timed};
pub use location::{Location, Position};
pub use run::{Run, TrackError, Tracked};
pub use sport::{Sport, SportKind, Sporting};
