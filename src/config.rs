//! Backend Configuration
//!
//! The selector treats this as an opaque blob: it is passed through to
//! the chosen backend untouched, and validation is the backend's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Connection settings for a backend adapter.
///
/// Which fields matter depends on the backend family; the selector
/// never inspects any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Connection string for the underlying engine
    #[serde(default)]
    pub connection: String,

    /// Table name prefix (honored by the Think family)
    #[serde(default)]
    pub table_prefix: String,

    /// Backend-specific options, uninterpreted
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl BackendConfig {
    /// Create a config with just a connection string.
    #[must_use]
    pub fn with_connection(connection: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            ..Self::default()
        }
    }

    /// Set the table prefix.
    #[must_use]
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Set a backend-specific option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_construction() {
        let config = BackendConfig::with_connection("mysql://localhost/app")
            .with_table_prefix("app_")
            .with_option("charset", "utf8mb4");

        assert_eq!(config.connection, "mysql://localhost/app");
        assert_eq!(config.table_prefix, "app_");
        assert_eq!(config.options.get("charset").map(String::as_str), Some("utf8mb4"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: BackendConfig =
            serde_json::from_str(r#"{"connection": "mysql://localhost/app"}"#).unwrap();

        assert_eq!(config.connection, "mysql://localhost/app");
        assert!(config.table_prefix.is_empty());
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let config = BackendConfig::with_connection("pgsql://db/app").with_table_prefix("t_");
        let json = serde_json::to_string(&config).unwrap();
        let back: BackendConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
