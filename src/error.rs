// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with stable error codes.

use serde::Serialize;

use crate::models::TrackError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Track error: {0}")]
    Track(#[from] TrackError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error report body
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Stable snake_case code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Track(_) => "track_error",
            AppError::Json(_) => "json_error",
            AppError::Io(_) => "io_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Build a report, logging errors that are not the caller's fault.
    pub fn report(&self) -> ErrorReport {
        let details = match self {
            AppError::Io(msg) => Some(msg.clone()),
            AppError::Validation(errs) => Some(errs.to_string()),
            AppError::Track(err) => Some(err.to_string()),
            AppError::Json(err) => Some(err.to_string()),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                None
            }
        };

        ErrorReport {
            error: self.kind().to_string(),
            details,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
