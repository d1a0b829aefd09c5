// crates/sensor-monitoring-client/src/setup.rs
// ============================================================================
// Module: Suite Setup
// Description: One-time per-run login for every role.
// Purpose: Warm the session context before suites call authenticated endpoints.
// Dependencies: tracing, crate::api, crate::transport
// ============================================================================

//! ## Overview
//! [`SuiteSetup::ensure_tokens`] logs in each [`Role`] that has no cached
//! token. Every login uses its own [`ApiClient`] so cookie jars never leak
//! between roles; the client is dropped once the `token` cookie has been
//! copied into the [`SessionContext`].
//!
//! Setup is idempotent: roles already cached are reported as
//! [`RoleSetup::Cached`] and cost no network traffic. A login that yields no
//! cookie is reported, not raised, so suites see the backend's own
//! code and message when they go on to assert.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::api::AuthApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::LoginRequest;
use crate::session::Role;
use crate::session::SessionContext;
use crate::transport::ApiClient;

// ============================================================================
// SECTION: Credentials
// ============================================================================

/// Login credentials per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCredentials {
    /// Customer account.
    pub client: LoginRequest,
    /// Administrator account.
    pub admin: LoginRequest,
}

impl RoleCredentials {
    /// Returns the credentials for `role`.
    #[must_use]
    pub const fn for_role(&self, role: Role) -> &LoginRequest {
        match role {
            Role::Client => &self.client,
            Role::Admin => &self.admin,
        }
    }
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of setup for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSetup {
    /// A token was already cached; no request was sent.
    Cached,
    /// Login succeeded and the token was cached.
    LoggedIn,
    /// Login produced no token cookie.
    Failed {
        /// Envelope code returned by the login call.
        code: u16,
        /// Envelope message returned by the login call.
        message: String,
    },
}

/// Per-role setup outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetupReport {
    /// Outcome keyed by role.
    pub roles: BTreeMap<Role, RoleSetup>,
}

impl SetupReport {
    /// Returns the outcome for `role`.
    #[must_use]
    pub fn outcome(&self, role: Role) -> Option<&RoleSetup> {
        self.roles.get(&role)
    }

    /// Returns true when every role has a cached token.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.roles.values().all(|outcome| !matches!(outcome, RoleSetup::Failed { .. }))
    }

    /// Returns the number of network logins performed.
    #[must_use]
    pub fn logins(&self) -> usize {
        self.roles.values().filter(|outcome| !matches!(outcome, RoleSetup::Cached)).count()
    }
}

// ============================================================================
// SECTION: Setup
// ============================================================================

/// Logs in every role once per [`SessionContext`].
#[derive(Debug, Clone)]
pub struct SuiteSetup {
    config: ClientConfig,
    credentials: RoleCredentials,
}

impl SuiteSetup {
    /// Creates a setup helper.
    #[must_use]
    pub const fn new(config: ClientConfig, credentials: RoleCredentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Ensures a token is cached for every role.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when an isolated client cannot be built.
    pub async fn ensure_tokens(&self, session: &SessionContext) -> Result<SetupReport, ClientError> {
        let _gate = session.login_gate().await;
        let mut report = SetupReport::default();
        for role in Role::ALL {
            let outcome = if session.contains(role) {
                RoleSetup::Cached
            } else {
                self.login_role(role, session).await?
            };
            report.roles.insert(role, outcome);
        }
        Ok(report)
    }

    async fn login_role(
        &self,
        role: Role,
        session: &SessionContext,
    ) -> Result<RoleSetup, ClientError> {
        let client = ApiClient::new(&self.config)?;
        let response = AuthApi::new(&client).login_as(role, &self.credentials).await;
        let outcome = if let Some(token) = client.session_token() {
            session.set(role, token);
            tracing::info!(role = %role, code = response.code, "session token cached");
            RoleSetup::LoggedIn
        } else {
            tracing::warn!(
                role = %role,
                code = response.code,
                message = %response.message,
                "login returned no session token"
            );
            RoleSetup::Failed {
                code: response.code,
                message: response.message,
            }
        };
        Ok(outcome)
    }
}
