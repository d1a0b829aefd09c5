// system-tests/src/lib.rs
// ============================================================================
// Module: Sensor Monitoring System Tests Library
// Description: Shared configuration for the live API suites.
// Purpose: Provide environment constants and overrides to test binaries.
// Dependencies: sensor-monitoring-client, url
// ============================================================================

//! ## Overview
//! This crate hosts the fixed test environment (base URL, accounts, expected
//! messages) and the environment-variable overrides used by the live suites
//! in `system-tests/tests`.
//! Security posture: environment inputs are untrusted and parsed fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
