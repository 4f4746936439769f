//! Module manifest parsing

use crate::commands::DeclaredCommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a manifest, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Format for `path`; unrecognized extensions are read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Contents of a command module file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Constructor key; defaults to the module id
    #[serde(default)]
    pub export: Option<String>,
    /// Inline command declaration
    #[serde(default)]
    pub command: Option<DeclaredCommand>,
}

impl ModuleManifest {
    /// Parse manifest content. Blank content is an empty manifest.
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match format {
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}
