// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for the sensor monitoring suites.
// Purpose: Provide typed access to environment constants and overrides.
// Dependencies: sensor-monitoring-client, url
// ============================================================================

//! ## Overview
//! Fixed environment data (accounts, role names, expected messages) lives in
//! compile-time constants. A small set of non-secret settings can be
//! overridden from environment variables; credentials never can.
//! Security posture: environment inputs are untrusted and parsed fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;
mod environment;
mod expectations;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
pub use env::read_env_strict;
pub use environment::Credential;
pub use environment::ENVIRONMENT;
pub use environment::Environment;
pub use environment::role_credentials;
pub use expectations::API_MESSAGES;
pub use expectations::API_RESPONSE_CODES;
pub use expectations::ApiMessages;
pub use expectations::ApiResponseCodes;
