//! The validation seam.
//!
//! [`Validator`] is the minimal surface orchestration code depends on:
//! register a schema, validate one interaction. [`NoopValidator`] is the
//! absent-capability default: it accepts everything, so the arithmetic and
//! formatting flow stays testable with no service running.

use std::path::Path;

use crate::types::{ValidationRequest, ValidationResponse, ValidationResult};

/// Errors from the validation client.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("cannot read schema {path}: {source}")]
    SchemaFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("schema {path} is not valid JSON: {message}")]
    SchemaFormat { path: String, message: String },

    #[error("validation service unreachable: {0}")]
    Transport(String),

    #[error("unexpected reply from validation service: {0}")]
    Protocol(String),
}

/// Schema registration plus request/response validation.
pub trait Validator {
    /// Register the schema stored at `path` under `schema_id`.
    fn register_schema(&mut self, schema_id: &str, path: &Path) -> Result<(), ContractError>;

    /// Check one request/response pair against the registered schema.
    fn validate(
        &self,
        request: &ValidationRequest,
        response: &ValidationResponse,
    ) -> Result<ValidationResult, ContractError>;
}

/// Accepts every interaction. Used when no validation service is configured.
#[derive(Debug, Default)]
pub struct NoopValidator;

impl Validator for NoopValidator {
    fn register_schema(&mut self, _schema_id: &str, _path: &Path) -> Result<(), ContractError> {
        Ok(())
    }

    fn validate(
        &self,
        _request: &ValidationRequest,
        _response: &ValidationResponse,
    ) -> Result<ValidationResult, ContractError> {
        Ok(ValidationResult {
            valid: true,
            errors: vec![],
        })
    }
}
