// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reading heterogeneous activity records from JSON.
//!
//! A record is classified by the widest shape its fields describe: a
//! `track` makes it a run, a `kind` makes it a sport, anything else is a
//! plain activity. Unknown keys are dropped at decode time and do not
//! survive a later re-serialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Activity, Run, Sport, Time, Timed};

/// The shapes a record can take, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    Activity,
    Sport,
    Run,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Activity => "activity",
            Shape::Sport => "sport",
            Shape::Run => "run",
        };
        f.write_str(name)
    }
}

/// One decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActivityRecord {
    Run(Run),
    Sport(Sport),
    Activity(Activity),
}

impl ActivityRecord {
    pub fn shape(&self) -> Shape {
        match self {
            ActivityRecord::Run(_) => Shape::Run,
            ActivityRecord::Sport(_) => Shape::Sport,
            ActivityRecord::Activity(_) => Shape::Activity,
        }
    }

    /// The narrowest view of this record.
    pub fn activity(&self) -> &Activity {
        match self {
            ActivityRecord::Run(r) => AsRef::<Activity>::as_ref(r),
            ActivityRecord::Sport(s) => AsRef::<Activity>::as_ref(s),
            ActivityRecord::Activity(a) => a,
        }
    }

    /// Check interval order, distance and coordinate ranges.
    pub fn validate(&self) -> Result<()> {
        match self {
            ActivityRecord::Run(r) => r.validate()?,
            ActivityRecord::Sport(s) => s.validate()?,
            ActivityRecord::Activity(a) => a.validate()?,
        }
        Ok(())
    }
}

impl Timed for ActivityRecord {
    fn start(&self) -> Time {
        self.activity().start
    }

    fn stop(&self) -> Time {
        self.activity().stop
    }
}

impl<'de> Deserialize<'de> for ActivityRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = Value::deserialize(deserializer)?;
        let shape = classify(&value).map_err(D::Error::custom)?;

        let record = match shape {
            Shape::Run => serde_json::from_value(value).map(ActivityRecord::Run),
            Shape::Sport => serde_json::from_value(value).map(ActivityRecord::Sport),
            Shape::Activity => serde_json::from_value(value).map(ActivityRecord::Activity),
        };
        record.map_err(|e| D::Error::custom(format!("invalid {shape} record: {e}")))
    }
}

/// Pick the widest shape a JSON object claims to be.
fn classify(value: &Value) -> std::result::Result<Shape, String> {
    let object = value
        .as_object()
        .ok_or_else(|| "activity record must be a JSON object".to_string())?;

    let shape = if object.contains_key("track") {
        Shape::Run
    } else if object.contains_key("kind") || object.contains_key("kind_enum") {
        Shape::Sport
    } else {
        Shape::Activity
    };
    Ok(shape)
}

/// Parse a JSON array of activity records.
pub fn parse_records(json_data: &str) -> Result<Vec<ActivityRecord>> {
    let records: Vec<ActivityRecord> = serde_json::from_str(json_data)?;
    tracing::debug!(count = records.len(), "Parsed activity records");
    Ok(records)
}

/// Load a JSON array of activity records from a file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ActivityRecord>> {
    let path = path.as_ref();
    let json_data = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;
    let records = parse_records(&json_data)?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded activity records");
    Ok(records)
}

/// Keep the records that pass validation, logging and dropping the rest.
pub fn retain_valid(records: Vec<ActivityRecord>) -> Vec<ActivityRecord> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record.validate() {
            Ok(()) => Some(record),
            Err(err) => {
                let report = err.report();
                tracing::warn!(
                    index,
                    shape = %record.shape(),
                    error = %report.error,
                    details = ?report.details,
                    "Skipping invalid record"
                );
                None
            }
        })
        .collect()
}
