//! Error types for Finsheet core.
//!
//! Recalculation itself never fails. These cover the edges: reading
//! commands, loading seed rows and writing output.

use thiserror::Error;

use finsheet_engine::model::RowId;

/// Errors that can occur in the Finsheet application
#[derive(Error, Debug)]
pub enum FinsheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid command '{input}': {message}")]
    Command { input: String, message: String },

    #[error("Duplicate row id {0} in seed rows")]
    DuplicateRowId(RowId),
}

impl FinsheetError {
    pub(crate) fn command(input: &str, message: impl Into<String>) -> Self {
        FinsheetError::Command {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinsheetError>;
