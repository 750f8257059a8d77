use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Built-in function names of the decision expression language, seeded into
/// the root scope by default. Several span more than one word.
pub const DEFAULT_BUILTINS: &[&str] = &[
    "date",
    "time",
    "date and time",
    "duration",
    "years and months duration",
    "number",
    "string",
    "substring",
    "string length",
    "upper case",
    "lower case",
    "substring before",
    "substring after",
    "replace",
    "contains",
    "starts with",
    "ends with",
    "matches",
    "list contains",
    "count",
    "min",
    "max",
    "sum",
    "mean",
    "and",
    "or",
    "sublist",
    "append",
    "concatenate",
    "insert before",
    "remove",
    "reverse",
    "index of",
    "union",
    "distinct values",
    "flatten",
    "decimal",
    "floor",
    "ceiling",
    "not",
];

/// How [`NameResolver::recognize`](crate::resolver::NameResolver::recognize)
/// decides where an identifier ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Scan the whole candidate run, then commit to the longest declared name.
    #[default]
    Lookahead,
    /// Drive the incremental predicate and roll back to the last checkpoint.
    Checkpoint,
}

/// Resolver settings, usually left at their defaults.
///
/// ```toml
/// builtins = ["date", "date and time"]
/// strategy = "checkpoint"
/// trace = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Names pre-populated into the root scope.
    pub builtins: Vec<String>,
    /// Label of the root (built-in) scope.
    pub root_label: String,
    /// Label of the scope opened when the resolver is created.
    pub global_label: String,
    /// Bottom label of the name stack.
    pub seed_label: String,
    pub strategy: MatchStrategy,
    /// Install a [`LogSink`](crate::trace::LogSink) when no sink is given.
    pub trace: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            builtins: DEFAULT_BUILTINS.iter().map(|name| name.to_string()).collect(),
            root_label: "<builtin>".to_string(),
            global_label: "<global>".to_string(),
            seed_label: "<local>".to_string(),
            strategy: MatchStrategy::default(),
            trace: false,
        }
    }
}

impl ResolverConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Same settings with an empty root scope.
    pub fn without_builtins(mut self) -> Self {
        self.builtins.clear();
        self
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ResolverConfig::from_toml_str("").unwrap(), ResolverConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = ResolverConfig::from_toml_str(
            r#"
            builtins = ["sum", "string length"]
            strategy = "checkpoint"
            "#,
        )
        .unwrap();
        assert_eq!(config.builtins, vec!["sum", "string length"]);
        assert_eq!(config.strategy, MatchStrategy::Checkpoint);
        assert_eq!(config.global_label, "<global>");
        assert!(!config.trace);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = ResolverConfig::from_toml_str(r#"strategy = "greedy""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_builtins_include_multi_word_names() {
        let config = ResolverConfig::default();
        assert!(config.builtins.iter().any(|name| name == "date and time"));
        assert!(config.without_builtins().builtins.is_empty());
    }
}
