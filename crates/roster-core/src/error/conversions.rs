//! From trait implementations for RosterError conversions

use super::types::RosterError;

impl From<std::io::Error> for RosterError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<walkdir::Error> for RosterError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let message = match error.io_error() {
            Some(io) => io.to_string(),
            None => error.to_string(),
        };
        Self::discovery(path, message)
    }
}

impl From<tokio::task::JoinError> for RosterError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::io(format!("Background task failed: {}", error))
    }
}
