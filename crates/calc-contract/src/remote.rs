//! HTTP-backed validation client.
//!
//! Speaks a small JSON surface to the validation service: `POST /schemas`,
//! `POST /validate`, `POST /consumers`, `GET /consumers`, and
//! `GET /can-i-deploy`. The service owns all contract logic; this client
//! serializes payloads and decodes replies, nothing more.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::{
    CanIDeployResult, ConsumerInfo, RegisterConsumerOptions, ValidationRequest,
    ValidationResponse, ValidationResult,
};
use crate::validator::{ContractError, Validator};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Synchronous client for a validation service.
pub struct RemoteValidator {
    agent: ureq::Agent,
    base_url: String,
}

#[derive(Serialize)]
struct RegisterSchemaBody<'a> {
    schema_id: &'a str,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct RegisterSchemaReply {
    #[allow(dead_code)]
    status: String,
}

#[derive(Serialize)]
struct ValidateBody<'a> {
    request: &'a ValidationRequest,
    response: &'a ValidationResponse,
}

impl RemoteValidator {
    /// Build a client for the service at `addr`, either a bare `host:port`
    /// (the conventional form of the address variable) or a full `http://`
    /// URL.
    pub fn connect(addr: &str) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_connect(Some(REQUEST_TIMEOUT))
                .timeout_global(Some(REQUEST_TIMEOUT))
                .build(),
        );
        let base_url = if addr.starts_with("http://") || addr.starts_with("https://") {
            addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{addr}")
        };
        Self { agent, base_url }
    }

    /// Register this consumer's endpoint usage for breaking-change
    /// detection.
    pub fn register_consumer(
        &self,
        options: &RegisterConsumerOptions,
    ) -> Result<ConsumerInfo, ContractError> {
        self.post_json("/consumers", options)
    }

    /// List consumers registered for a schema in an environment.
    pub fn list_consumers(
        &self,
        schema_id: &str,
        environment: &str,
    ) -> Result<Vec<ConsumerInfo>, ContractError> {
        self.get_json(&format!(
            "/consumers?schema_id={schema_id}&environment={environment}"
        ))
    }

    /// Ask whether `schema_version` is safe to deploy to `environment`.
    pub fn can_i_deploy(
        &self,
        schema_id: &str,
        schema_version: &str,
        environment: &str,
    ) -> Result<CanIDeployResult, ContractError> {
        self.get_json(&format!(
            "/can-i-deploy?schema_id={schema_id}&version={schema_version}&environment={environment}"
        ))
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<T, ContractError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ContractError::Protocol(e.to_string()))?;
        let response = self
            .agent
            .post(&format!("{}{path}", self.base_url))
            .header("Content-Type", "application/json")
            .send(body.as_bytes())
            .map_err(|e| ContractError::Transport(e.to_string()))?;
        Self::decode(response)
    }

    fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ContractError> {
        let response = self
            .agent
            .get(&format!("{}{path_and_query}", self.base_url))
            .header("Accept", "application/json")
            .call()
            .map_err(|e| ContractError::Transport(e.to_string()))?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<T, ContractError> {
        let mut reply = String::new();
        response
            .into_body()
            .into_reader()
            .read_to_string(&mut reply)
            .map_err(|e| ContractError::Transport(e.to_string()))?;
        serde_json::from_str(&reply)
            .map_err(|e| ContractError::Protocol(format!("{e} in reply {reply:?}")))
    }
}

impl Validator for RemoteValidator {
    fn register_schema(&mut self, schema_id: &str, path: &Path) -> Result<(), ContractError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContractError::SchemaFile {
            path: path.display().to_string(),
            source,
        })?;
        let schema = serde_json::from_str(&text).map_err(|e| ContractError::SchemaFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let _: RegisterSchemaReply =
            self.post_json("/schemas", &RegisterSchemaBody { schema_id, schema })?;
        Ok(())
    }

    fn validate(
        &self,
        request: &ValidationRequest,
        response: &ValidationResponse,
    ) -> Result<ValidationResult, ContractError> {
        self.post_json("/validate", &ValidateBody { request, response })
    }
}
