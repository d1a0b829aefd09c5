// crates/sensor-monitoring-client/src/models/mod.rs
// ============================================================================
// Module: API Models
// Description: Request bodies, query records, and response records.
// Purpose: Give each endpoint a typed body and payload shape.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Request types serialize exactly the fields the backend expects; optional
//! fields are skipped when absent. Response records decode leniently so a
//! partially populated payload still classifies as data, and unknown fields
//! are retained where the backend shape is open-ended.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod group;
pub mod project;
pub mod sensor;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::License;
pub use auth::LoginRequest;
pub use auth::RoleInfo;
pub use auth::UserData;
pub use group::CreateGroupRequest;
pub use group::EditGroupRequest;
pub use group::Group;
pub use group::ListGroupsParams;
pub use project::CreateProjectRequest;
pub use project::EditProjectRequest;
pub use project::ListProjectsParams;
pub use project::Project;
pub use sensor::EditSensorRequest;
pub use sensor::Sensor;

// ============================================================================
// SECTION: Query Helpers
// ============================================================================

/// Query pairs for list endpoints, in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Appends the shared `page`/`limit`/`search` parameters when supplied.
///
/// `search` is skipped when empty, matching the backend's "no filter" form.
pub(crate) fn push_paging(
    pairs: &mut QueryPairs,
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<&str>,
) {
    if let Some(page) = page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(limit) = limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(search) = search.filter(|search| !search.is_empty()) {
        pairs.push(("search", search.to_string()));
    }
}

/// Decodes a JSON `null` as the type's default value.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}
