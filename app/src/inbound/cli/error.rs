//! Errors surfaced by the command-line adapter.

use std::io;

use crate::domain::DomainError;

/// Failure while running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A domain service refused or failed the operation.
    #[error("{0}")]
    Domain(#[from] DomainError),
    /// Writing output or reading input failed.
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
    /// Input ended while an answer was still expected.
    #[error("input ended while waiting for {expected}")]
    InputClosed {
        /// Prompt that went unanswered.
        expected: String,
    },
    /// An answer or argument could not be used.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// Offending field.
        field: String,
        /// Why it was refused.
        message: String,
    },
}

impl CliError {
    pub(super) fn invalid_input(field: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.to_string(),
        }
    }
}
