// system-tests/src/config/environment.rs
// ============================================================================
// Module: Test Environment Constants
// Description: Target backend, accounts, and fixed reference values.
// Purpose: Keep environment facts in one typed table shared by every suite.
// Dependencies: sensor-monitoring-client
// ============================================================================

//! ## Overview
//! [`ENVIRONMENT`] describes the shared development backend: its base URL,
//! the valid and deliberately invalid accounts per role, and the reference
//! values the suites compare against. Credentials are constants only.

use sensor_monitoring_client::Role;
use sensor_monitoring_client::RoleCredentials;
use sensor_monitoring_client::models::LoginRequest;

/// Username and password pair.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    /// Account username.
    pub username: &'static str,
    /// Account password.
    pub password: &'static str,
}

impl Credential {
    /// Builds the login body for this pair.
    #[must_use]
    pub fn login_request(self) -> LoginRequest {
        LoginRequest::new(self.username, self.password)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fixed facts about the target environment.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    /// Default backend base URL.
    pub base_url: &'static str,
    /// Customer account that can log in.
    pub valid_user: Credential,
    /// Customer username that does not exist.
    pub nonexistent_user: Credential,
    /// Customer username with the wrong password.
    pub wrong_password: Credential,
    /// Administrator account that can log in.
    pub valid_admin: Credential,
    /// Administrator username that does not exist.
    pub nonexistent_admin: Credential,
    /// Administrator username with the wrong password.
    pub wrong_password_admin: Credential,
    /// Role name reported for the customer account.
    pub client_role: &'static str,
    /// Role name reported for the administrator account.
    pub admin_role: &'static str,
    /// Project code the customer account always belongs to.
    pub default_project: &'static str,
    /// Status string of an active account.
    pub active_status: &'static str,
}

impl Environment {
    /// Returns the role name the backend reports for `role`.
    #[must_use]
    pub const fn role_name(&self, role: Role) -> &'static str {
        match role {
            Role::Client => self.client_role,
            Role::Admin => self.admin_role,
        }
    }
}

/// Shared development environment.
pub const ENVIRONMENT: Environment = Environment {
    base_url: "https://dev-nearon.synapsis.id",
    valid_user: Credential {
        username: "mitrajaya",
        password: "password",
    },
    nonexistent_user: Credential {
        username: "useryangtidakada",
        password: "password123",
    },
    wrong_password: Credential {
        username: "mitrajaya",
        password: "passwordsalah",
    },
    valid_admin: Credential {
        username: "admin",
        password: "admin123",
    },
    nonexistent_admin: Credential {
        username: "adminyangtidakada",
        password: "password123",
    },
    wrong_password_admin: Credential {
        username: "admin",
        password: "passwordsalahadmin",
    },
    client_role: "Customer",
    admin_role: "Administrator",
    default_project: "MITRA",
    active_status: "active",
};

/// Returns the valid login for each role, as used by suite setup.
#[must_use]
pub fn role_credentials() -> RoleCredentials {
    RoleCredentials {
        client: ENVIRONMENT.valid_user.login_request(),
        admin: ENVIRONMENT.valid_admin.login_request(),
    }
}
