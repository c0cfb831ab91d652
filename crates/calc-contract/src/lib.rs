//! Client-side bindings for the contract-validation service.
//!
//! The service itself is a black box reached over HTTP: register a schema,
//! submit a request/response pair, get back a pass/fail verdict plus error
//! strings. This crate only moves payloads; it contains no schema or
//! contract logic of its own.
//!
//! - [`types`] — payloads exchanged with the service
//! - [`validator`] — the [`Validator`](validator::Validator) seam and its
//!   no-op default
//! - [`remote`] — the HTTP-backed implementation, including consumer
//!   registration and deployment-safety queries

pub mod remote;
pub mod types;
pub mod validator;
