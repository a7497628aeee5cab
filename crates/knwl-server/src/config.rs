//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, namespace, database
//! location and comment hydration.

use knwl_domain::{CommentHydration, Namespace, OntologyError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// The namespace root is not usable
    #[error("Invalid namespace in configuration: {0}")]
    InvalidNamespace(#[from] OntologyError),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    pub bind_port: u16,

    /// Namespace root served by the API
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// SQLite database file; in-memory when absent
    #[serde(default)]
    pub database_path: Option<String>,

    /// How comments are read back into entities
    #[serde(default)]
    pub comment_hydration: CommentHydration,
}

fn default_namespace() -> String {
    "http://dbpedia.org/ontology/".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields and the namespace root
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }
        self.namespace()?;
        Ok(())
    }

    /// The validated namespace
    pub fn namespace(&self) -> Result<Namespace, ConfigError> {
        Ok(Namespace::new(&self.namespace)?)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3000,
            namespace: default_namespace(),
            database_path: None,
            comment_hydration: CommentHydration::Legacy,
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 3000);
        assert!(config.database_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            namespace = "https://knwl.example.org"
            database_path = "data/knwl.db"
            comment_hydration = "corrected"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.namespace().unwrap().as_str(), "https://knwl.example.org/");
        assert_eq!(config.database_path.as_deref(), Some("data/knwl.db"));
        assert_eq!(config.comment_hydration, CommentHydration::Corrected);
    }

    #[test]
    fn test_defaults_when_omitted() {
        let config: ServerConfig = toml::from_str("bind_address = \"::1\"\nbind_port = 80").unwrap();
        assert_eq!(config.namespace, "http://dbpedia.org/ontology/");
        assert_eq!(config.comment_hydration, CommentHydration::Legacy);
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let mut config = ServerConfig::default_test_config();
        config.namespace = "http://example.org/onto#".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidNamespace(_))));

        config.namespace = "http://example.org/".to_string();
        config.bind_address = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }
}
