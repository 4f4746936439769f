//! Registration pass settings

use super::logging_config::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How alias collisions between message commands are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasPolicy {
    /// A later alias silently replaces the earlier mapping (logged at warn)
    #[default]
    LastWriteWins,
    /// The first mapping is kept and the later alias is dropped
    FirstWriteWins,
}

/// Settings for discovering and registering commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Directory that `roots` are resolved against
    pub base_dir: PathBuf,
    /// Command directories, scanned in order
    pub roots: Vec<PathBuf>,
    /// Entries whose file name contains this marker are pruned
    pub ignore_marker: String,
    /// Extensions (without the dot) of loadable module manifests
    pub extensions: Vec<String>,
    /// Message command names that are never inserted into the command table
    pub disabled_commands: Vec<String>,
    pub alias_policy: AliasPolicy,
    /// Maximum number of modules loaded at the same time
    pub load_concurrency: usize,
    pub follow_links: bool,
    pub logging: LoggingConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            roots: vec![PathBuf::from("commands")],
            ignore_marker: "-ignore".to_string(),
            extensions: vec![
                "toml".to_string(),
                "yaml".to_string(),
                "yml".to_string(),
                "json".to_string(),
            ],
            disabled_commands: Vec::new(),
            alias_policy: AliasPolicy::default(),
            load_concurrency: 8,
            follow_links: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Create a config scanning `roots` under `base_dir`
    pub fn new<I, P>(base_dir: impl Into<PathBuf>, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            base_dir: base_dir.into(),
            roots: roots.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Disable message commands by name
    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_commands
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.alias_policy = policy;
        self
    }

    pub fn with_load_concurrency(mut self, concurrency: usize) -> Self {
        self.load_concurrency = concurrency;
        self
    }

    pub fn with_ignore_marker(mut self, marker: impl Into<String>) -> Self {
        self.ignore_marker = marker.into();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Roots resolved against the base directory
    pub fn resolved_roots(&self) -> Vec<PathBuf> {
        self.roots
            .iter()
            .map(|root| self.base_dir.join(root))
            .collect()
    }
}
