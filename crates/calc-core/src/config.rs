//! Client configuration from the environment.
//!
//! Three settings, each overridable by an environment variable and each with
//! a default suitable for the local demo stack: producer base URL,
//! validation service address, and schema file path. Empty variables count
//! as unset.

use std::path::PathBuf;

pub const PRODUCER_URL_VAR: &str = "PRODUCER_URL";
pub const VALIDATOR_ADDR_VAR: &str = "VALIDATOR_ADDR";
pub const SCHEMA_PATH_VAR: &str = "SCHEMA_PATH";

const DEFAULT_PRODUCER_URL: &str = "http://localhost:10001";
const DEFAULT_VALIDATOR_ADDR: &str = "localhost:9550";
const DEFAULT_SCHEMA_PATH: &str = "./calculator-api.json";

/// The schema id under which the calculator contract is registered.
pub const SCHEMA_ID: &str = "calculator-api";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub producer_url: String,
    pub validator_addr: String,
    pub schema_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            producer_url: DEFAULT_PRODUCER_URL.to_string(),
            validator_addr: DEFAULT_VALIDATOR_ADDR.to_string(),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }
}

impl ClientConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`] but with an injectable variable
    /// source, so tests never mutate process state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        };
        Self {
            producer_url: get(PRODUCER_URL_VAR, DEFAULT_PRODUCER_URL),
            validator_addr: get(VALIDATOR_ADDR_VAR, DEFAULT_VALIDATOR_ADDR),
            schema_path: PathBuf::from(get(SCHEMA_PATH_VAR, DEFAULT_SCHEMA_PATH)),
        }
    }
}
