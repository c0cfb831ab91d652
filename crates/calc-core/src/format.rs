//! Query-parameter and result-line formatting.
//!
//! Both the outgoing query string and the printed expression collapse whole
//! values to their integer form: `4`, never `4.0`. Non-whole values keep
//! Rust's default shortest round-trippable text, so an inexact quotient like
//! `10 / 3` prints its full repeating-decimal approximation.

use std::fmt;

/// The two producer operations this client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Multiply,
    Divide,
}

impl Operation {
    /// URL path segment on the producer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Display symbol in the printed expression.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a number for use as a query parameter.
/// Whole values lose the decimal point.
pub fn format_param(value: f64) -> String {
    if value == value.floor() && !value.is_infinite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format a number for display. Same integer collapsing as [`format_param`],
/// with explicit infinity and NaN guards.
pub fn format_number(value: f64) -> String {
    if value == value.floor() && !value.is_infinite() && !value.is_nan() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Render the final expression line, e.g. `4 * 7 = 28`.
pub fn format_result(x: f64, op: Operation, y: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_number(x),
        op.symbol(),
        format_number(y),
        format_number(result)
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
