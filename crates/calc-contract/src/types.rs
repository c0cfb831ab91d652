//! Payloads exchanged with the contract-validation service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The request half of a validated interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ValidationRequest {
    /// A GET request for `path` with no headers of interest.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.into(),
            headers: BTreeMap::new(),
        }
    }
}

/// The response half of a validated interaction. The body is carried as raw
/// text; the service decides how to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ValidationResponse {
    /// A JSON response with the given status and body text.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status,
            headers,
            body: body.into(),
        }
    }
}

/// Pass/fail verdict plus explanations from the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One endpoint a consumer depends on, with the response fields it reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointUsage {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl EndpointUsage {
    pub fn new(method: &str, path: &str, fields: &[&str]) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Registration payload for breaking-change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterConsumerOptions {
    pub consumer_id: String,
    pub consumer_version: String,
    pub schema_id: String,
    pub schema_version: String,
    pub environment: String,
    pub used_endpoints: Vec<EndpointUsage>,
}

/// A consumer known to the validation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerInfo {
    pub consumer_id: String,
    pub consumer_version: String,
    pub environment: String,
}

/// Deployment-safety verdict for a schema version in an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanIDeployResult {
    pub safe: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}
