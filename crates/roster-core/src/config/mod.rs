//! Configuration for the registration pass
//!
//! Sources are applied in order: defaults, then a config file (TOML, YAML or
//! JSON by extension), then `ROSTER_*` environment variables. The result is
//! validated before use.

mod env_loader;
mod file_loader;
mod logging_config;
mod registry_config;
mod validation;

pub use env_loader::{apply_env_overrides, apply_env_overrides_from};
pub use file_loader::load_from_file;
pub use logging_config::LoggingConfig;
pub use registry_config::{AliasPolicy, RegistryConfig};
pub use validation::ConfigValidator;

use crate::error::RosterResult;
use std::path::Path;

/// Load, override and validate configuration
pub fn load_config(path: &Path) -> RosterResult<RegistryConfig> {
    let mut config = load_from_file(path)?;
    apply_env_overrides(&mut config)?;
    ConfigValidator::validate(&config)?;
    Ok(config)
}
