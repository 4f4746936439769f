//! File-based configuration loading

use super::registry_config::RegistryConfig;
use crate::error::{RosterError, RosterResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> RosterResult<RegistryConfig> {
    if !path.exists() {
        return Ok(RegistryConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        RosterError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: RegistryConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            RosterError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            RosterError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            RosterError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasPolicy;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.toml");
        fs::write(
            &config_path,
            r#"
base_dir = "/srv/bot"
roots = ["commands", "events/commands"]
disabled_commands = ["eval"]
alias_policy = "first_write_wins"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/srv/bot"));
        assert_eq!(config.roots.len(), 2);
        assert_eq!(config.disabled_commands, vec!["eval".to_string()]);
        assert_eq!(config.alias_policy, AliasPolicy::FirstWriteWins);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ignore_marker, "-ignore");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.yaml");
        fs::write(&config_path, "roots:\n  - slash\nload_concurrency: 2\n").unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("slash")]);
        assert_eq!(config.load_concurrency, 2);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.json");
        fs::write(&config_path, r#"{"ignore_marker": "-skip"}"#).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.ignore_marker, "-skip");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roster.toml");
        fs::write(&config_path, "roots = [").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert_eq!(err.error_code(), "ROSTER_CONFIG");
    }
}
