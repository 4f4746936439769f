//! Environment variable overrides

use super::registry_config::RegistryConfig;
use crate::error::{RosterError, RosterResult};
use std::env;
use std::path::PathBuf;

/// Apply `ROSTER_*` environment variables on top of `config`
pub fn apply_env_overrides(config: &mut RegistryConfig) -> RosterResult<()> {
    apply_env_overrides_from(config, |key| env::var(key).ok())
}

/// Apply overrides read through `lookup`
///
/// Recognized keys: `ROSTER_BASE_DIR`, `ROSTER_ROOTS` (comma-separated),
/// `ROSTER_DISABLED_COMMANDS` (comma-separated, appended),
/// `ROSTER_LOAD_CONCURRENCY`, `ROSTER_LOG_LEVEL`.
pub fn apply_env_overrides_from<F>(config: &mut RegistryConfig, lookup: F) -> RosterResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_dir) = lookup("ROSTER_BASE_DIR") {
        config.base_dir = PathBuf::from(base_dir);
    }

    if let Some(roots) = lookup("ROSTER_ROOTS") {
        config.roots = split_list(&roots).map(PathBuf::from).collect();
    }

    if let Some(disabled) = lookup("ROSTER_DISABLED_COMMANDS") {
        config
            .disabled_commands
            .extend(split_list(&disabled).map(str::to_string));
    }

    if let Some(concurrency) = lookup("ROSTER_LOAD_CONCURRENCY") {
        config.load_concurrency = concurrency
            .trim()
            .parse()
            .map_err(|_| RosterError::config("Invalid ROSTER_LOAD_CONCURRENCY value"))?;
    }

    if let Some(level) = lookup("ROSTER_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(())
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}
