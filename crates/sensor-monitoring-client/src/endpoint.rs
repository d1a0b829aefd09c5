// crates/sensor-monitoring-client/src/endpoint.rs
// ============================================================================
// Module: Endpoint Catalog
// Description: Static descriptors for every backend operation.
// Purpose: Parameterize the shared transport call by method, path, and names.
// Dependencies: reqwest, url
// ============================================================================

//! ## Overview
//! Each backend operation is one [`Endpoint`]: an operation name (used for the
//! fallback and error messages), an HTTP method, a path template with
//! `{name}` placeholders, and whether the response carries pagination.
//! Wrappers differ only in which descriptor they pass to the transport.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Descriptor
// ============================================================================

/// Static description of one backend operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, for example `Create project`.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// Whether the response carries `page`/`count`/`total`.
    pub paged: bool,
}

/// Path rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A placeholder had no matching parameter.
    #[error("missing path parameter {0}")]
    MissingParameter(String),
    /// The base URL cannot carry path segments.
    #[error("base url cannot be a base")]
    CannotBeABase,
}

impl Endpoint {
    /// Message used when the body is empty and not an envelope.
    #[must_use]
    pub fn fallback_message(&self) -> String {
        format!("{} failed", self.operation)
    }

    /// Returns true when the operation sends a JSON body.
    #[must_use]
    pub fn is_write(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT
    }

    /// Resolves the path template against the base URL.
    ///
    /// Each parameter is inserted as one percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when a placeholder is unbound or the base URL
    /// cannot carry a path.
    pub fn url(&self, base: &Url, params: &[(&str, &str)]) -> Result<Url, PathError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| PathError::CannotBeABase)?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|segment| !segment.is_empty()) {
                match placeholder(segment) {
                    Some(name) => {
                        let value = params
                            .iter()
                            .find(|(key, _)| *key == name)
                            .map(|(_, value)| *value)
                            .ok_or_else(|| PathError::MissingParameter(name.to_string()))?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        Ok(url)
    }
}

/// Returns the placeholder name when the segment is `{name}`.
fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// `POST /api/auth/login`.
pub static LOGIN: Endpoint = Endpoint {
    operation: "Login",
    method: Method::POST,
    path: "/api/auth/login",
    paged: false,
};

/// `GET /api/users/profiles`.
pub static GET_PROFILES: Endpoint = Endpoint {
    operation: "Get all profiles",
    method: Method::GET,
    path: "/api/users/profiles",
    paged: false,
};

/// `POST /api/projectnode/company-projects/{companyId}/create`.
pub static CREATE_PROJECT: Endpoint = Endpoint {
    operation: "Create project",
    method: Method::POST,
    path: "/api/projectnode/company-projects/{companyId}/create",
    paged: false,
};

/// `GET /api/projectnode/company-projects/{companyId}/{projectId}`.
pub static GET_PROJECT: Endpoint = Endpoint {
    operation: "Get project",
    method: Method::GET,
    path: "/api/projectnode/company-projects/{companyId}/{projectId}",
    paged: false,
};

/// `PUT /api/projectnode/projects/{projectId}`.
pub static EDIT_PROJECT: Endpoint = Endpoint {
    operation: "Edit project",
    method: Method::PUT,
    path: "/api/projectnode/projects/{projectId}",
    paged: false,
};

/// `GET /api/projectnode/projects`.
pub static LIST_PROJECTS: Endpoint = Endpoint {
    operation: "Get all projects",
    method: Method::GET,
    path: "/api/projectnode/projects",
    paged: true,
};

/// `DELETE /api/projectnode/projects/{projectId}`.
pub static DELETE_PROJECT: Endpoint = Endpoint {
    operation: "Delete project",
    method: Method::DELETE,
    path: "/api/projectnode/projects/{projectId}",
    paged: false,
};

/// `POST /api/projectnode/projects/{projectId}/groups`.
pub static CREATE_GROUP: Endpoint = Endpoint {
    operation: "Create group",
    method: Method::POST,
    path: "/api/projectnode/projects/{projectId}/groups",
    paged: false,
};

/// `GET /api/projectnode/projects/{projectId}/groups`.
pub static LIST_GROUPS: Endpoint = Endpoint {
    operation: "Get all groups",
    method: Method::GET,
    path: "/api/projectnode/projects/{projectId}/groups",
    paged: true,
};

/// `PUT /api/projectnode/projects/{projectId}/groups/{groupId}`.
pub static EDIT_GROUP: Endpoint = Endpoint {
    operation: "Edit group",
    method: Method::PUT,
    path: "/api/projectnode/projects/{projectId}/groups/{groupId}",
    paged: false,
};

/// `DELETE /api/projectnode/projects/{projectId}/groups/{groupId}`.
pub static DELETE_GROUP: Endpoint = Endpoint {
    operation: "Delete group",
    method: Method::DELETE,
    path: "/api/projectnode/projects/{projectId}/groups/{groupId}",
    paged: false,
};

/// `PUT /api/projectnode/nodes/{nodeId}/sensors/{sensorId}`.
pub static EDIT_SENSOR: Endpoint = Endpoint {
    operation: "Edit sensor",
    method: Method::PUT,
    path: "/api/projectnode/nodes/{nodeId}/sensors/{sensorId}",
    paged: false,
};

/// Every catalogued endpoint.
pub static ALL: [&Endpoint; 12] = [
    &LOGIN,
    &GET_PROFILES,
    &CREATE_PROJECT,
    &GET_PROJECT,
    &EDIT_PROJECT,
    &LIST_PROJECTS,
    &DELETE_PROJECT,
    &CREATE_GROUP,
    &LIST_GROUPS,
    &EDIT_GROUP,
    &DELETE_GROUP,
    &EDIT_SENSOR,
];
