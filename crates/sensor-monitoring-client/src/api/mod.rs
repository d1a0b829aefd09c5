// crates/sensor-monitoring-client/src/api/mod.rs
// ============================================================================
// Module: API Wrappers
// Description: Resource-family wrappers over the shared transport.
// Purpose: Expose one typed method per backend operation.
// Dependencies: crate::transport
// ============================================================================

//! ## Overview
//! Each wrapper borrows an [`crate::ApiClient`] and maps its methods onto
//! endpoint descriptors. Methods never fail: every outcome arrives as an
//! envelope, with transport problems folded in by the shared call path.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod profile;
pub mod sensor_monitoring;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::AuthApi;
pub use profile::ProfileApi;
pub use sensor_monitoring::SensorMonitoringApi;
