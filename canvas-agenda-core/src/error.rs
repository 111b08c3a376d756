//! Error types for canvas-agenda.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a calendar export.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Could not find ICS file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse ICS file: {0}")]
    Parse(String),
}

/// Result type alias for canvas-agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
