//! Core error types

use crate::commands::CommandCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Error returned by a module constructor.
///
/// Constructors belong to the embedding application, so their failures are
/// carried as opaque boxed errors and only ever rendered into log lines.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for roster
#[derive(Error, Debug, Clone)]
pub enum RosterError {
    /// A directory or file could not be listed or stat'ed
    #[error("Discovery error at '{}': {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    /// A candidate module could not be imported or constructed
    #[error("Failed to load '{}': {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// A loaded command failed admission checks
    #[error("Invalid command in '{}': {message}", path.display())]
    Validation { path: PathBuf, message: String },

    /// A command name is already taken within its category
    #[error("The '{name}' {category} name has already been added ('{}')", path.display())]
    Conflict {
        category: CommandCategory,
        name: String,
        path: PathBuf,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors outside of discovery
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl RosterError {
    /// Stable code used as a structured log field
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Discovery { .. } => "ROSTER_DISCOVERY",
            Self::Load { .. } => "ROSTER_LOAD",
            Self::Validation { .. } => "ROSTER_VALIDATION",
            Self::Conflict { .. } => "ROSTER_CONFLICT",
            Self::Config { .. } => "ROSTER_CONFIG",
            Self::Io { .. } => "ROSTER_IO",
        }
    }

    /// Path of the file or directory the error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Discovery { path, .. }
            | Self::Load { path, .. }
            | Self::Validation { path, .. }
            | Self::Conflict { path, .. } => Some(path),
            Self::Io { path, .. } => path.as_deref(),
            Self::Config { .. } => None,
        }
    }
}
