// crates/sensor-monitoring-client/src/lib.rs
// ============================================================================
// Module: Sensor Monitoring Client Library
// Description: Typed HTTP client for the sensor monitoring platform API.
// Purpose: Provide envelope-normalizing wrappers, session handling, and setup.
// Dependencies: reqwest, serde, serde_json, thiserror, tokio, tracing, url
// ============================================================================

//! ## Overview
//! This crate wraps the sensor monitoring backend's HTTP API for end-to-end
//! testing. Every wrapper method performs exactly one HTTP call and returns a
//! normalized [`Envelope`] or [`Paged`] value; failures are folded into the
//! envelope rather than surfaced as errors, so test code asserts uniformly on
//! `code`, `status`, `message`, and `data`.
//!
//! Session tokens travel as a `token` cookie and are cached per [`Role`] in an
//! explicit [`SessionContext`]. [`SuiteSetup`] warms that context once per test
//! run.
//!
//! Security posture: server responses are untrusted; tokens and passwords are
//! redacted from `Debug` output, transcripts, and logs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod models;
pub mod session;
pub mod setup;
pub mod transport;


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use api::AuthApi;
pub use api::ProfileApi;
pub use api::SensorMonitoringApi;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use envelope::Envelope;
pub use envelope::EnvelopeOrigin;
pub use envelope::Paged;
pub use envelope::Pagination;
pub use envelope::Payload;
pub use envelope::RawEnvelope;
pub use error::ClientError;
pub use error::SessionError;
pub use session::Role;
pub use session::SessionContext;
pub use session::SessionToken;
pub use setup::RoleCredentials;
pub use setup::RoleSetup;
pub use setup::SetupReport;
pub use setup::SuiteSetup;
pub use transport::ApiClient;
pub use transport::TOKEN_COOKIE;
pub use transport::TranscriptEntry;
