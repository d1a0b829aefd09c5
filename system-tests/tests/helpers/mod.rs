// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the sensor monitoring live suites.
// Purpose: Provide artifacts, logging, and session setup to every suite.
// Dependencies: system-tests, sensor-monitoring-client
// ============================================================================

//! ## Overview
//! Shared helpers for the sensor monitoring live suites.
//! Invariants:
//! - Each test binary logs in at most once per role.
//! - Artifacts never contain session tokens or passwords.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod artifacts;
