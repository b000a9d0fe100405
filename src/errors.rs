//! Unified application error type.
//! All modules (models, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid clock time: {0}")]
    InvalidTime(String),

    #[error("Invalid interval (start must precede end): {0}")]
    InvalidInterval(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid interval format (expected HH:MM-HH:MM[=description]): {0}")]
    InvalidIntervalFormat(String),

    // ---------------------------
    // Positional access and search
    // ---------------------------
    #[error("No item at index {0}")]
    IndexOutOfRange(usize),

    #[error("New time overlaps an existing item: {0}")]
    Overlap(String),

    #[error("No free slot of {0} minutes for these bounds")]
    NoFreeSlot(i64),

    // ---------------------------
    // Interactive edit
    // ---------------------------
    #[error("Invalid edit choice: {0}")]
    InvalidEditChoice(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
