//! Error types for the narrative planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all plan store and session operations.
#[derive(Error, Debug)]
pub enum PlaybookError {
    /// Phase not found for the given name
    #[error("Phase '{name}' not found")]
    PhaseNotFound { name: String },
    /// Narrative not found for the given ID
    #[error("Narrative '{id}' not found")]
    NarrativeNotFound { id: String },
    /// Structural rule violation; the plan was left unchanged
    #[error("Precondition failed: {reason}")]
    PreconditionFailed { reason: String },
    /// Import input is not well-formed JSON
    #[error("Failed to parse playbook: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    /// Import input is well-formed JSON but not a playbook object
    #[error("Invalid playbook document: {reason}")]
    InvalidDocument { reason: String },
    /// An imported entry does not have the fields an operation needs
    #[error("Malformed entry at {location}: {reason}")]
    MalformedEntry { location: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlaybookError {
        PlaybookError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating malformed entry errors.
pub struct MalformedEntryBuilder {
    location: String,
}

impl MalformedEntryBuilder {
    /// Create a new builder for the entry at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlaybookError {
        PlaybookError::MalformedEntry {
            location: self.location,
            reason: reason.into(),
        }
    }
}

impl PlaybookError {
    /// Creates a builder for malformed entry errors.
    pub fn malformed(location: impl Into<String>) -> MalformedEntryBuilder {
        MalformedEntryBuilder::new(location)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a precondition failure with the given reason.
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            reason: reason.into(),
        }
    }

    pub fn phase_not_found(name: impl Into<String>) -> Self {
        Self::PhaseNotFound { name: name.into() }
    }

    pub fn narrative_not_found(id: impl fmt::Display) -> Self {
        Self::NarrativeNotFound { id: id.to_string() }
    }

    /// Whether this error was raised while reading an import document.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidDocument { .. })
    }
}

/// Extension trait for mapping I/O errors onto the path they occurred at.
pub trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| PlaybookError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlaybookError>;
