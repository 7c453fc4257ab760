//! Error types for the SVG viewer
//!
//! Every failure in the viewer is recoverable. Errors are turned into
//! user-facing notices at the boundary instead of aborting the view.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::{Notice, OperationKind};

/// Top-level viewer error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// The source text does not look like an SVG document
    #[error("Invalid SVG code")]
    InvalidMarkup,

    /// The action needs source text but the buffer is empty
    #[error("No SVG code available")]
    EmptyInput,

    /// The same kind of operation has not settled yet
    #[error("{0} already in progress")]
    OperationInProgress(OperationKind),

    /// A collaborator outside the viewer failed (file read, fetch, render, clipboard)
    #[error("{operation} failed: {reason}")]
    External {
        operation: OperationKind,
        reason: String,
    },

    /// The API was called before `initViewer`
    #[error("Viewer not initialized")]
    NotInitialized,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ViewerError {
    pub fn external(operation: OperationKind, reason: impl Into<String>) -> Self {
        ViewerError::External {
            operation,
            reason: reason.into(),
        }
    }

    /// Convert to the notice shown to the user
    ///
    /// Validation problems are warnings, everything else is an error.
    /// External failures use a generic message; the reason only goes to the log.
    pub fn notice(&self) -> Notice {
        match self {
            ViewerError::InvalidMarkup => Notice::warning("Invalid SVG code"),
            ViewerError::EmptyInput => Notice::warning("No SVG code available"),
            ViewerError::OperationInProgress(kind) => {
                Notice::warning(format!("{} already in progress", kind))
            }
            ViewerError::External { operation, .. } => {
                Notice::error(format!("{} failed. Please try again.", operation))
            }
            ViewerError::NotInitialized | ViewerError::Config(_) => Notice::error(self.to_string()),
        }
    }
}

pub type ViewerResult<T> = Result<T, ViewerError>;
