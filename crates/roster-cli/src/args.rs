//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "roster - discover, classify and register bot commands")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List module candidates found under the command roots
    Scan {
        /// Roots to scan instead of the configured ones
        roots: Vec<PathBuf>,

        /// Directory the roots are resolved against
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Register every declared command and report conflicts
    Check {
        /// Roots to check instead of the configured ones
        roots: Vec<PathBuf>,

        /// Directory the roots are resolved against
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Exit with an error if anything was rejected or failed to load
        #[arg(long)]
        strict: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,

    /// Validate the configuration file
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file() {
        let cli = Cli::try_parse_from(["roster", "scan"]).unwrap();
        assert_eq!(cli.config_file, DEFAULT_CONFIG_FILE);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_scan_roots_and_base_dir() {
        let cli = Cli::try_parse_from([
            "roster",
            "scan",
            "commands",
            "extra",
            "--base-dir",
            "/srv/bot",
        ])
        .unwrap();

        match cli.command {
            Commands::Scan { roots, base_dir } => {
                assert_eq!(roots, vec![PathBuf::from("commands"), PathBuf::from("extra")]);
                assert_eq!(base_dir, Some(PathBuf::from("/srv/bot")));
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_check_flags_and_global_options() {
        let cli = Cli::try_parse_from([
            "roster",
            "check",
            "--strict",
            "--json",
            "--config-file",
            "bot.yaml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.config_file, "bot.yaml");
        assert!(cli.verbose);
        match cli.command {
            Commands::Check {
                roots,
                strict,
                json,
                ..
            } => {
                assert!(roots.is_empty());
                assert!(strict);
                assert!(json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_config_subcommand_required() {
        assert!(Cli::try_parse_from(["roster", "config"]).is_err());
        let cli = Cli::try_parse_from(["roster", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Validate
            }
        ));
    }
}
