//! Synchronous HTTP client for the producer.

use std::io::Read;
use std::time::Duration;

use calc_core::format::{format_param, Operation};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the request path for an operation, e.g. `/multiply?x=4&y=7`.
pub(crate) fn request_path(op: Operation, x: f64, y: f64) -> String {
    format!("/{}?x={}&y={}", op.as_str(), format_param(x), format_param(y))
}

/// A producer reply: status code plus raw body text.
pub(crate) struct ProducerResponse {
    pub status: u16,
    pub body: String,
}

/// GET a path from the producer at `base_url`.
///
/// Error statuses come back as ordinary responses, not transport errors;
/// the caller needs the body of a 4xx reply for its message.
pub(crate) fn get(base_url: &str, path: &str) -> Result<ProducerResponse, String> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_connect(Some(CONNECT_TIMEOUT))
            .http_status_as_error(false)
            .build(),
    );

    let url = format!("{base_url}{path}");
    let response = agent
        .get(&url)
        .header("Accept", "application/json")
        .call()
        .map_err(|e| e.to_string())?;

    let status = response.status().as_u16();
    let mut body = String::new();
    response
        .into_body()
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| format!("failed to read response: {e}"))?;

    Ok(ProducerResponse { status, body })
}
