//! Configuration validation

use super::registry_config::RegistryConfig;
use crate::error::{RosterError, RosterResult};

const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &RegistryConfig) -> RosterResult<()> {
        Self::validate_roots(config)?;
        Self::validate_discovery(config)?;
        Self::validate_limits(config)?;
        Self::validate_logging(config)?;
        Ok(())
    }

    fn validate_roots(config: &RegistryConfig) -> RosterResult<()> {
        if config.roots.is_empty() {
            return Err(RosterError::config("At least one command root is required"));
        }
        Ok(())
    }

    fn validate_discovery(config: &RegistryConfig) -> RosterResult<()> {
        if config.ignore_marker.is_empty() {
            // An empty marker is contained in every name and would prune everything
            return Err(RosterError::config("ignore_marker cannot be empty"));
        }

        if config.extensions.is_empty() {
            return Err(RosterError::config(
                "At least one loadable extension is required",
            ));
        }

        for ext in &config.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(RosterError::config(format!(
                    "Invalid extension '{}': use the bare extension, e.g. 'toml'",
                    ext
                )));
            }
        }

        Ok(())
    }

    fn validate_limits(config: &RegistryConfig) -> RosterResult<()> {
        if config.load_concurrency == 0 {
            return Err(RosterError::config("load_concurrency must be at least 1"));
        }
        Ok(())
    }

    fn validate_logging(config: &RegistryConfig) -> RosterResult<()> {
        if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(RosterError::config(format!(
                "Unknown log format '{}'. Valid formats are: {:?}",
                config.logging.format, LOG_FORMATS
            )));
        }
        Ok(())
    }
}
