//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::logging;
use roster_core::RosterResult;
use roster_core::config::{self, ConfigValidator, RegistryConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> RosterResult<()> {
    match cli.command {
        Commands::Scan { roots, base_dir } => {
            let config = effective_config(&cli.config_file, roots, base_dir)?;
            logging::init(&config.logging, cli.verbose);
            log_effective(&config);
            commands::scan::scan(&config, cli.verbose).await
        }
        Commands::Check {
            roots,
            base_dir,
            strict,
            json,
        } => {
            let config = effective_config(&cli.config_file, roots, base_dir)?;
            logging::init(&config.logging, cli.verbose);
            log_effective(&config);
            commands::check::check(config, strict, json).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&cli.config_file),
            ConfigAction::Validate => commands::config::validate(&cli.config_file),
        },
    }
}

/// File and environment configuration with command-line overrides applied
fn effective_config(
    config_file: &str,
    roots: Vec<PathBuf>,
    base_dir: Option<PathBuf>,
) -> RosterResult<RegistryConfig> {
    let mut config = config::load_from_file(Path::new(config_file))?;
    config::apply_env_overrides(&mut config)?;

    if !roots.is_empty() {
        config.roots = roots;
    }
    if let Some(base_dir) = base_dir {
        config.base_dir = base_dir;
    }

    ConfigValidator::validate(&config)?;
    Ok(config)
}

fn log_effective(config: &RegistryConfig) {
    debug!(
        base_dir = %config.base_dir.display(),
        roots = config.roots.len(),
        load_concurrency = config.load_concurrency,
        "Effective configuration resolved"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.toml");
        fs::write(
            &config_path,
            "base_dir = \"/srv/bot\"\nroots = [\"commands\"]\nload_concurrency = 2\n",
        )
        .unwrap();

        let config = effective_config(
            config_path.to_str().unwrap(),
            vec![PathBuf::from("plugins")],
            Some(temp_dir.path().to_path_buf()),
        )
        .unwrap();

        assert_eq!(config.roots, vec![PathBuf::from("plugins")]);
        assert_eq!(config.base_dir, temp_dir.path());
        assert_eq!(config.load_concurrency, 2);
    }

    #[test]
    fn test_file_values_kept_without_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.toml");
        fs::write(&config_path, "roots = [\"a\", \"b\"]\n").unwrap();

        let config = effective_config(config_path.to_str().unwrap(), Vec::new(), None).unwrap();

        assert_eq!(config.roots, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.toml");
        fs::write(&config_path, "load_concurrency = 0\n").unwrap();

        let err = effective_config(config_path.to_str().unwrap(), Vec::new(), None).unwrap_err();
        assert_eq!(err.error_code(), "ROSTER_CONFIG");
    }
}
