// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sport shape: an activity with a kind and a distance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::models::activity::{Activity, Distance, Time, Timed};
use crate::models::location::Position;
use crate::models::run::Run;

/// The closed set of sports.
///
/// This is the single discriminant for a sport; the string label is derived
/// from it with [`SportKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub enum SportKind {
    Run,
    Swim,
}

impl SportKind {
    pub const ALL: [SportKind; 2] = [SportKind::Run, SportKind::Swim];

    pub fn as_str(self) -> &'static str {
        match self {
            SportKind::Run => "run",
            SportKind::Swim => "swim",
        }
    }

    /// Ordinal used by older records in their `kind_enum` field.
    pub fn ordinal(self) -> u64 {
        match self {
            SportKind::Run => 0,
            SportKind::Swim => 1,
        }
    }

    fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.ordinal() == ordinal)
    }
}

impl fmt::Display for SportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "run" => Ok(SportKind::Run),
            "swim" => Ok(SportKind::Swim),
            other => Err(format!("unknown sport kind: {other}")),
        }
    }
}

/// An activity that is a sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(try_from = "SportRecord")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct Sport {
    #[serde(flatten)]
    #[validate(nested)]
    pub activity: Activity,
    pub kind: SportKind,
    /// Distance covered (meters)
    #[validate(range(min = 0.0))]
    pub distance: Distance,
}

impl Sport {
    /// Widen into a [`Run`], copying this sport's fields.
    pub fn run(self, track: Vec<Position>) -> Run {
        Run { sport: self, track }
    }
}

/// Anything that is at least a sport.
pub trait Sporting: Timed {
    fn kind(&self) -> SportKind;
    fn distance(&self) -> Distance;
}

impl<T: Sporting + ?Sized> Sporting for &T {
    fn kind(&self) -> SportKind {
        (**self).kind()
    }

    fn distance(&self) -> Distance {
        (**self).distance()
    }
}

impl Timed for Sport {
    fn start(&self) -> Time {
        self.activity.start
    }

    fn stop(&self) -> Time {
        self.activity.stop
    }
}

impl Sporting for Sport {
    fn kind(&self) -> SportKind {
        self.kind
    }

    fn distance(&self) -> Distance {
        self.distance
    }
}

impl AsRef<Activity> for Sport {
    fn as_ref(&self) -> &Activity {
        &self.activity
    }
}

impl AsRef<Sport> for Sport {
    fn as_ref(&self) -> &Sport {
        self
    }
}

/// Wire form of a sport, accepting the legacy `kind_enum` field.
#[derive(Deserialize)]
struct SportRecord {
    #[serde(flatten)]
    activity: Activity,
    kind: SportKind,
    #[serde(default)]
    kind_enum: Option<LegacyKind>,
    distance: Distance,
}

/// Older records repeat the kind as an ordinal or a variant name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyKind {
    Ordinal(u64),
    Name(String),
}

impl LegacyKind {
    fn resolve(&self) -> Result<SportKind, String> {
        match self {
            LegacyKind::Ordinal(n) => {
                SportKind::from_ordinal(*n).ok_or_else(|| format!("unknown kind_enum ordinal: {n}"))
            }
            LegacyKind::Name(name) => name.parse(),
        }
    }
}

impl TryFrom<SportRecord> for Sport {
    type Error = String;

    fn try_from(record: SportRecord) -> Result<Self, Self::Error> {
        if let Some(legacy) = &record.kind_enum {
            let legacy_kind = legacy.resolve()?;
            if legacy_kind != record.kind {
                return Err(format!(
                    "kind_enum {legacy_kind} does not match kind {}",
                    record.kind
                ));
            }
        }

        Ok(Sport {
            activity: record.activity,
            kind: record.kind,
            distance: record.distance,
        })
    }
}
