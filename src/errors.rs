//! Unified application error type.
//! All modules (core, sheet, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Sheet / parsing errors
    // ---------------------------
    #[error("Sheet contained no data")]
    EmptySheet,

    #[error("Invalid date cell: {0}")]
    InvalidDate(String),

    #[error("Invalid time cell: {0}")]
    InvalidTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Folding errors
    // ---------------------------
    #[error("No sleep/wake events found in sheet data")]
    NoEvents,

    #[error("Generated row not readable by the renderer: {0}")]
    MalformedRow(String),

    // ---------------------------
    // Cache errors
    // ---------------------------
    #[error("Cache error: {0}")]
    Cache(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
