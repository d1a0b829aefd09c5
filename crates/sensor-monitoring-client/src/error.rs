// crates/sensor-monitoring-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error types for client construction and session lookups.
// Purpose: Keep setup failures typed while wrapper calls stay infallible.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Wrapper methods never return errors; they normalize every failure into an
//! envelope. The errors here cover the few places that can legitimately fail
//! before a call is attempted: building the HTTP client and reading a token
//! that was never cached.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::session::Role;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Client construction errors.
///
/// # Invariants
/// - Variants are stable for test assertions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed or cannot carry paths.
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl {
        /// Base URL as configured.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The underlying HTTP client failed to build.
    #[error("failed to build http client: {0}")]
    Build(String),
}

/// Session lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No token has been cached for the role.
    #[error("no session token cached for {0} role")]
    MissingToken(Role),
}
