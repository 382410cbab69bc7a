//! Unified application error type.
//! All modules (core, calendar, export, chart, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Calendar API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    // ---------------------------
    // Summarize / chart
    // ---------------------------
    #[error("No data: {0} not found. Run `caltrack collect` first.")]
    MissingSourceFile(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
