// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Shapes demo
//!
//! Reads activity records (or uses built-in samples) and reports the
//! duration each derivation strategy produces for them.

use activity_shapes::{
    config::{Config, LogFormat},
    error::{AppError, Result},
    services::{
        add_duration, duration, load_records, retain_valid, ActivityBase, ActivityRecord,
    },
    Activity, SportKind,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log_format);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let report = err.report();
            tracing::error!(error = %report.error, details = ?report.details, "Demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let records = match &config.input_path {
        Some(path) => load_records(path)?,
        None => sample_records(),
    };

    let total = records.len();
    let records = retain_valid(records);

    for record in &records {
        let frozen = ActivityBase::from_shape(record.clone());
        let with_duration = serde_json::to_string(&add_duration(record))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serializing record: {}", e)))?;

        tracing::info!(
            shape = %record.shape(),
            base = frozen.duration(),
            function = duration(record),
            record = %with_duration,
            "Derived duration"
        );
    }

    tracing::info!(
        count = records.len(),
        skipped = total - records.len(),
        "Done"
    );
    Ok(())
}

/// The three sample shapes: an activity, a sport built from it, and a run
/// built from the sport.
fn sample_records() -> Vec<ActivityRecord> {
    let a = Activity::new(1.0, 2.0);
    let s = a.sport(SportKind::Run, 0.0);
    let r = s.clone().run(vec![]);

    vec![
        ActivityRecord::Activity(a),
        ActivityRecord::Sport(s),
        ActivityRecord::Run(r),
    ]
}

/// Initialize structured logging.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_shapes=debug,info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
    }
}
