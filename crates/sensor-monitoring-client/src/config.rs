// crates/sensor-monitoring-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Connection settings for the sensor monitoring API client.
// Purpose: Carry base URL and timeout into transport construction.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`ClientConfig`] is a plain value; environment parsing lives with the
//! system-test harness so the client stays free of process-global inputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Connection settings for an [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, for example `https://dev-nearon.synapsis.id`.
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a config for the base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
