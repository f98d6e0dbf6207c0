//! Logging configuration read from the environment.

use serde::{Deserialize, Serialize};

/// Filter directives, as understood by `tracing_subscriber::EnvFilter`.
pub const FILTER_VAR: &str = "RUST_LOG";

/// Output format selector: `json`, `pretty` or `compact`.
pub const FORMAT_VAR: &str = "LIFESPAN_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Pretty,
    #[default]
    Compact,
}

impl core::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Problems found while reading the environment, logged once the
    /// subscriber is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown formats fall back to the
    /// default and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(err) => config
                    .warnings
                    .push(format!("{FORMAT_VAR}: {err}; using {:?}", config.format)),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "lifespan_events=debug"),
            ("LIFESPAN_LOG_FORMAT", " JSON "),
        ]));
        assert_eq!(config.filter, "lifespan_events=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn unknown_format_falls_back_with_warning() {
        let config = ObservabilityConfig::from_lookup(lookup(&[("LIFESPAN_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("xml"));
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = ObservabilityConfig::from_lookup(lookup(&[("RUST_LOG", "  ")]));
        assert_eq!(config.filter, "info");
    }
}
