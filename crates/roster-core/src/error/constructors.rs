//! Constructor methods for RosterError

use super::types::RosterError;
use crate::commands::CommandCategory;
use std::any::Any;
use std::fmt;
use std::path::PathBuf;

impl RosterError {
    /// Create a new discovery error
    pub fn discovery(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Discovery {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new load error
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a load error from a panic payload caught in module code
    pub fn panicked(
        path: impl Into<PathBuf>,
        origin: impl fmt::Display,
        payload: &(dyn Any + Send),
    ) -> Self {
        let reason = if let Some(message) = payload.downcast_ref::<&'static str>() {
            message
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };
        Self::load(path, format!("{} panicked: {}", origin, reason))
    }

    /// Create a new validation error
    pub fn validation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new name conflict error
    pub fn conflict(
        category: CommandCategory,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::Conflict {
            category,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }
}
