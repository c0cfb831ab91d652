//! Core parsing and formatting for the calc client.
//!
//! This crate holds everything the CLI needs that does not touch the
//! network:
//! - [`json`] — flat-JSON scalar extraction by single-pass scanning
//! - [`format`] — query-parameter and result-line rendering
//! - [`response`] — producer response parsing built on the two above
//! - [`config`] — environment-backed client configuration

pub mod config;
pub mod format;
pub mod json;
pub mod response;
