//! Producer response parsing.
//!
//! Success bodies carry a numeric `result` field, failure bodies a string
//! `error` field. Both are pulled out with the flat-JSON scanner; the
//! structural mode is available for callers that opt in.

use crate::json;

/// How the `result` field is pulled out of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Single-pass substring scan ([`json::extract`]). The default.
    #[default]
    Scan,
    /// Full JSON parse ([`json::extract_strict`]).
    Strict,
}

/// Failure to read the numeric `result` out of a success body.
///
/// Covers both a missing field and an unparsable number; the raw body is
/// carried for the error message.
#[derive(Debug, thiserror::Error)]
#[error("could not parse 'result' from response: {body}")]
pub struct ResponseError {
    pub body: String,
}

/// Pull the numeric `result` field out of a success body.
pub fn parse_result(body: &str, mode: ExtractMode) -> Result<f64, ResponseError> {
    let raw = match mode {
        ExtractMode::Scan => json::extract(body, "result").map(str::to_owned),
        ExtractMode::Strict => json::extract_strict(body, "result"),
    };
    raw.and_then(|token| token.parse().ok())
        .ok_or_else(|| ResponseError { body: body.to_string() })
}

/// Derive the failure message for an error response: the `error` field when
/// present, otherwise the bare status code.
pub fn error_message(body: &str, status: u16) -> String {
    match json::extract(body, "error") {
        Some(message) => message.to_string(),
        None => format!("HTTP {status}"),
    }
}
