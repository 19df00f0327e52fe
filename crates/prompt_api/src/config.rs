use std::{env, time::Duration};

use thiserror::Error;

/// Name of the variable holding the backing table name.
pub const TABLE_NAME_VAR: &str = "PROMPT_TABLE_NAME";
/// Name of the variable holding the storage call timeout in milliseconds.
pub const STORAGE_TIMEOUT_VAR: &str = "PROMPT_STORAGE_TIMEOUT_MS";
/// Name of the variable holding the SQLite database path.
pub const SQLITE_PATH_VAR: &str = "SQLITE_PATH";
/// Name of the variable overriding the DynamoDB endpoint (local DynamoDB).
pub const DYNAMODB_ENDPOINT_VAR: &str = "DYNAMODB_ENDPOINT_URL";

const DEFAULT_STORAGE_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_SQLITE_PATH: &str = "prompts.db";

/// Errors raised while loading configuration. All of them are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid table name '{0}': expected 3-255 characters of [A-Za-z0-9_.-]")]
    InvalidTableName(String),
    #[error("Invalid value for {var}: '{value}' is not a positive integer")]
    InvalidNumber { var: &'static str, value: String },
}

/// Application configuration loaded once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing table name (required).
    pub table_name: String,
    /// Storage call timeout in milliseconds (default: 2,000)
    pub storage_timeout_ms: u64,
    /// Path to SQLite database file (default: "prompts.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    pub sqlite_path: String,
    /// DynamoDB endpoint override (default: none, use the AWS endpoint)
    /// Note: Only used when the `dynamodb` feature is enabled.
    pub dynamodb_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PROMPT_TABLE_NAME` - Backing table name (required)
    /// - `PROMPT_STORAGE_TIMEOUT_MS` - Storage call timeout (default: 2,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "prompts.db")
    /// - `DYNAMODB_ENDPOINT_URL` - DynamoDB endpoint override (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        validate_table_name(&table_name)?;

        let storage_timeout_ms = match lookup(STORAGE_TIMEOUT_VAR) {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: STORAGE_TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_STORAGE_TIMEOUT_MS,
        };

        Ok(Self {
            table_name,
            storage_timeout_ms,
            sqlite_path: lookup(SQLITE_PATH_VAR).unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            dynamodb_endpoint_url: lookup(DYNAMODB_ENDPOINT_VAR).filter(|v| !v.is_empty()),
        })
    }

    /// Get the storage call timeout as a Duration.
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage_timeout_ms)
    }
}

/// Table names follow the DynamoDB naming rules. The same restriction makes
/// the name safe to quote as a SQLite identifier.
fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let valid = (3..=255).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidTableName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[(TABLE_NAME_VAR, "Prompts")])).unwrap();

        assert_eq!(config.table_name, "Prompts");
        assert_eq!(config.storage_timeout_ms, 2_000);
        assert_eq!(config.sqlite_path, "prompts.db");
        assert_eq!(config.dynamodb_endpoint_url, None);
    }

    #[test]
    fn test_missing_table_name_is_fatal() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(TABLE_NAME_VAR))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(TABLE_NAME_VAR, "")])),
            Err(ConfigError::Missing(TABLE_NAME_VAR))
        );
    }

    #[test]
    fn test_invalid_table_name_is_rejected() {
        for name in ["ab", "prompts table", "prompts\"; DROP", "tábla"] {
            assert_eq!(
                Config::from_lookup(lookup(&[(TABLE_NAME_VAR, name)])),
                Err(ConfigError::InvalidTableName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            (TABLE_NAME_VAR, "PromptApiStack-Prompts-1A2B3C"),
            (STORAGE_TIMEOUT_VAR, "750"),
            (SQLITE_PATH_VAR, "/tmp/prompts.db"),
            (DYNAMODB_ENDPOINT_VAR, "http://localhost:8000"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "PromptApiStack-Prompts-1A2B3C");
        assert_eq!(config.storage_timeout(), Duration::from_millis(750));
        assert_eq!(config.sqlite_path, "/tmp/prompts.db");
        assert_eq!(
            config.dynamodb_endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        for value in ["0", "-5", "soon"] {
            assert_eq!(
                Config::from_lookup(lookup(&[
                    (TABLE_NAME_VAR, "Prompts"),
                    (STORAGE_TIMEOUT_VAR, value)
                ])),
                Err(ConfigError::InvalidNumber {
                    var: STORAGE_TIMEOUT_VAR,
                    value: value.to_string()
                })
            );
        }
    }
}
