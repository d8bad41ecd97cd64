// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity shapes: timed activities, sports and runs
//!
//! This crate models activities as a hierarchy of widening record shapes
//! and provides three ways of deriving an activity's duration.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use models::{Activity, Location, Position, Run, Sport, SportKind, Sporting, Timed, Tracked};
pub use services::{add_duration, duration, ActivityBase, WithDuration};
