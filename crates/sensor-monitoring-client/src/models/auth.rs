// crates/sensor-monitoring-client/src/models/auth.rs
// ============================================================================
// Module: Auth Models
// Description: Login request and user profile records.
// Purpose: Type the login and profile endpoints.
// Dependencies: serde
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::null_default;

/// Login request body.
///
/// # Invariants
/// - `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Builds a login request from a username/password pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Role attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleInfo {
    /// Role identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Display name, for example `Customer` or `Administrator`.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Owning company, absent for platform roles.
    pub company_id: Option<String>,
    /// Role description.
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    /// Number of users holding the role.
    #[serde(deserialize_with = "null_default")]
    pub total_users: u64,
    /// Number of permissions granted by the role.
    #[serde(deserialize_with = "null_default")]
    pub total_permissions: u64,
}

/// License attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    /// License key.
    #[serde(deserialize_with = "null_default")]
    pub key: String,
    /// License package name.
    #[serde(deserialize_with = "null_default")]
    pub package: String,
}

/// User record returned by login and profile endpoints.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    /// User identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Login username.
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    /// Contact email.
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    /// Contact phone numbers.
    #[serde(deserialize_with = "null_default")]
    pub phone: Vec<String>,
    /// Avatar URL.
    #[serde(deserialize_with = "null_default")]
    pub avatar: String,
    /// Account status, `active` for usable accounts.
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Creation timestamp.
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
    /// Primary role.
    #[serde(deserialize_with = "null_default")]
    pub role: RoleInfo,
    /// Per-project roles.
    #[serde(deserialize_with = "null_default")]
    pub project_role: Vec<RoleInfo>,
    /// Firmware account username.
    #[serde(deserialize_with = "null_default")]
    pub firmware_user: String,
    /// Firmware account password.
    #[serde(deserialize_with = "null_default")]
    pub firmware_password: String,
    /// Project codes the user can access.
    #[serde(deserialize_with = "null_default")]
    pub projects: Vec<String>,
    /// Telegram handles.
    #[serde(deserialize_with = "null_default")]
    pub telegram: Vec<String>,
    /// Telegram chat identifiers.
    #[serde(deserialize_with = "null_default")]
    pub telegram_chat_ids: Vec<String>,
    /// Whether notifications are enabled.
    #[serde(deserialize_with = "null_default")]
    pub notification_enabled: bool,
    /// Account license.
    #[serde(deserialize_with = "null_default")]
    pub license: License,
}

impl UserData {
    /// Returns true when the user can access the project code.
    #[must_use]
    pub fn has_project(&self, project: &str) -> bool {
        self.projects.iter().any(|code| code == project)
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("status", &self.status)
            .field("role", &self.role)
            .field("projects", &self.projects)
            .finish_non_exhaustive()
    }
}
