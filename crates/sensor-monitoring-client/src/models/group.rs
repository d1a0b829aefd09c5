// crates/sensor-monitoring-client/src/models/group.rs
// ============================================================================
// Module: Group Models
// Description: Sensor group request bodies, list parameters, and records.
// Purpose: Type the project group endpoints.
// Dependencies: serde, serde_json
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::QueryPairs;
use super::null_default;
use super::push_paging;

/// Body for creating a group in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for editing a group's name and description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditGroupRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query parameters for listing groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListGroupsParams {
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Free-text filter; empty strings are treated as absent.
    pub search: Option<String>,
}

impl ListGroupsParams {
    /// Returns the query pairs to send.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_paging(&mut pairs, self.page, self.limit, self.search.as_deref());
        pairs
    }
}

/// Group record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Group identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Owning project.
    pub project_id: Option<String>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
