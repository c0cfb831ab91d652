//! The multiply/divide flow: one GET against the producer, optional contract
//! validation, then the formatted expression on stdout.

use calc_contract::remote::RemoteValidator;
use calc_contract::types::{ValidationRequest, ValidationResponse, ValidationResult};
use calc_contract::validator::{ContractError, Validator};
use calc_core::config::{ClientConfig, SCHEMA_ID};
use calc_core::format::{format_result, Operation};
use calc_core::response::{self, ExtractMode};

use crate::client;

/// Run one operation end to end. Returns the process exit code.
pub(crate) fn run(
    config: &ClientConfig,
    op: Operation,
    x: f64,
    y: f64,
    validate: bool,
    strict_json: bool,
) -> i32 {
    let path = client::request_path(op, x, y);

    let reply = match client::get(&config.producer_url, &path) {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if reply.status >= 400 {
        eprintln!("Error: {}", response::error_message(&reply.body, reply.status));
        return 1;
    }

    if validate {
        let mut validator = RemoteValidator::connect(&config.validator_addr);
        match validate_interaction(&mut validator, config, &path, reply.status, &reply.body) {
            Ok(result) if !result.valid => {
                eprintln!("Validation failed: {}", result.errors.join(", "));
                return 1;
            }
            Ok(_) => eprintln!("Contract validation passed"),
            Err(e) => {
                // The producer already answered; a missing validator must
                // not fail the call.
                eprintln!("Warning: Failed to enable contract validation: {e}");
                eprintln!("Continuing without validation...");
            }
        }
    }

    let mode = if strict_json {
        ExtractMode::Strict
    } else {
        ExtractMode::Scan
    };
    let value = match response::parse_result(&reply.body, mode) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    println!("{}", format_result(x, op, y, value));
    0
}

/// Register the schema and validate one captured interaction through any
/// validator. The validator lives only for this call.
fn validate_interaction(
    validator: &mut dyn Validator,
    config: &ClientConfig,
    path: &str,
    status: u16,
    body: &str,
) -> Result<ValidationResult, ContractError> {
    validator.register_schema(SCHEMA_ID, &config.schema_path)?;
    validator.validate(
        &ValidationRequest::get(path),
        &ValidationResponse::json(status, body),
    )
}
