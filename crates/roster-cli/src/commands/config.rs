//! Configuration command implementation

use crate::console::CliConsole;
use roster_core::config::{self, ConfigValidator};
use roster_core::{RosterError, RosterResult};
use std::path::Path;

/// Print the effective configuration as TOML
pub fn show(config_file: &str) -> RosterResult<()> {
    let console = CliConsole::new(true);
    let path = Path::new(config_file);

    let mut config = config::load_from_file(path)?;
    config::apply_env_overrides(&mut config)?;

    if !path.exists() {
        console.warn(&format!(
            "Configuration file '{}' not found, showing defaults",
            config_file
        ));
    }

    let rendered = toml_string(&config)?;
    console.print_header("Effective configuration");
    println!("{}", rendered);
    Ok(())
}

/// Validate the configuration file
pub fn validate(config_file: &str) -> RosterResult<()> {
    let console = CliConsole::new(true);

    match config::load_config(Path::new(config_file)) {
        Ok(config) => {
            console.success(&format!("Configuration '{}' is valid", config_file));
            console.info(&format!(
                "{} root(s), {} disabled command(s)",
                config.roots.len(),
                config.disabled_commands.len()
            ));
            Ok(())
        }
        Err(e) => {
            console.error(&e.to_string());
            Err(e)
        }
    }
}

fn toml_string(config: &roster_core::RegistryConfig) -> RosterResult<String> {
    toml::to_string_pretty(config)
        .map_err(|e| RosterError::config(format!("Failed to serialize configuration: {}", e)))
}
