// crates/sensor-monitoring-client/src/models/project.rs
// ============================================================================
// Module: Project Models
// Description: Project request bodies, list parameters, and records.
// Purpose: Type the company-project and project endpoints.
// Dependencies: serde, serde_json
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::QueryPairs;
use super::null_default;
use super::push_paging;

/// Body for creating a project under a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project code, used as the project identifier in later calls.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for editing a project's name and description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditProjectRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query parameters for listing projects.
///
/// Absent fields are never sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListProjectsParams {
    /// Restrict to a company.
    pub company_id: Option<String>,
    /// Page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Free-text filter; empty strings are treated as absent.
    pub search: Option<String>,
}

impl ListProjectsParams {
    /// Returns the query pairs to send.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(company_id) = &self.company_id {
            pairs.push(("company_id", company_id.clone()));
        }
        push_paging(&mut pairs, self.page, self.limit, self.search.as_deref());
        pairs
    }
}

/// Project record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Backend identifier, when distinct from the code.
    pub id: Option<String>,
    /// Project code.
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Owning company.
    pub company_id: Option<String>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
