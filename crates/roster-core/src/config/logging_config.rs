//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration consumed by the CLI subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_logging_config_partial_json() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
    }
}
