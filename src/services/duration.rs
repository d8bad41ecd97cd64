// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Duration derivation.
//!
//! Three independent ways of getting `stop - start` out of an activity:
//! 1. [`ActivityBase`] computes it once at construction and keeps it,
//!    whatever shape sits on the base
//! 2. [`duration`] computes it on every call and attaches nothing
//! 3. [`add_duration`] copies the value and attaches the duration next to
//!    the original fields, keeping the input's full shape

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Distance, Position, SportKind, Sporting, Time, Timed, Tracked};

/// Base record that freezes its duration when built.
///
/// Any shape can sit on the base: `value` stays writable and keeps its own
/// fields, while `duration` does not follow later edits to start or stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBase<T = Activity> {
    #[serde(flatten)]
    pub value: T,
    duration: Time,
}

impl ActivityBase<Activity> {
    pub fn new(start: Time, stop: Time) -> Self {
        Self::from_shape(Activity::new(start, stop))
    }
}

impl<T: Timed> ActivityBase<T> {
    /// Put `value` on the base, computing its duration now.
    pub fn from_shape(value: T) -> Self {
        let duration = value.stop() - value.start();
        Self { value, duration }
    }
}

impl<T> ActivityBase<T> {
    /// Duration as of construction.
    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Timed> From<T> for ActivityBase<T> {
    fn from(value: T) -> Self {
        Self::from_shape(value)
    }
}

impl<T: Timed> Timed for ActivityBase<T> {
    fn start(&self) -> Time {
        self.value.start()
    }

    fn stop(&self) -> Time {
        self.value.stop()
    }
}

impl<T: Sporting> Sporting for ActivityBase<T> {
    fn kind(&self) -> SportKind {
        self.value.kind()
    }

    fn distance(&self) -> Distance {
        self.value.distance()
    }
}

impl<T: Tracked> Tracked for ActivityBase<T> {
    fn track(&self) -> &[Position] {
        self.value.track()
    }
}

impl<T, U> AsRef<U> for ActivityBase<T>
where
    T: AsRef<U>,
{
    fn as_ref(&self) -> &U {
        self.value.as_ref()
    }
}

/// Duration of any timed value.
pub fn duration<T: Timed + ?Sized>(x: &T) -> Time {
    x.stop() - x.start()
}

/// A value of shape `T` with a `duration` merged in.
///
/// Serializes flat: the duration sits beside `T`'s own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithDuration<T> {
    #[serde(flatten)]
    pub value: T,
    pub duration: Time,
}

impl<T> WithDuration<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Copy `x` and attach its duration.
///
/// The result keeps every capability of `T`, so a run stays a run. An
/// existing duration is not special-cased: applying this twice wraps twice.
pub fn add_duration<T: Timed + Clone>(x: &T) -> WithDuration<T> {
    WithDuration {
        value: x.clone(),
        duration: duration(x),
    }
}

impl<T: Timed> Timed for WithDuration<T> {
    fn start(&self) -> Time {
        self.value.start()
    }

    fn stop(&self) -> Time {
        self.value.stop()
    }
}

impl<T: Sporting> Sporting for WithDuration<T> {
    fn kind(&self) -> SportKind {
        self.value.kind()
    }

    fn distance(&self) -> Distance {
        self.value.distance()
    }
}

impl<T: Tracked> Tracked for WithDuration<T> {
    fn track(&self) -> &[Position] {
        self.value.track()
    }
}

impl<T, U> AsRef<U> for WithDuration<T>
where
    T: AsRef<U>,
{
    fn as_ref(&self) -> &U {
        self.value.as_ref()
    }
}
