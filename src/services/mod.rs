// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - derivations and record loading.

pub mod duration;
pub mod records;

pub use duration::{add_duration, duration, ActivityBase, WithDuration};
pub use records::{load_records, parse_records, retain_valid, ActivityRecord, Shape};
