// crates/sensor-monitoring-client/src/session.rs
// ============================================================================
// Module: Session Context
// Description: Per-role session token cache for a test run.
// Purpose: Share login tokens across tests through an explicit context value.
// Dependencies: serde, tokio
// ============================================================================

//! ## Overview
//! A [`SessionContext`] owns the most recently obtained [`SessionToken`] for
//! each [`Role`]. It is created by the test harness, passed to whatever needs
//! a token, and lives for the duration of one test run. Tokens never expire
//! inside a run.
//!
//! Writes go through an `RwLock`; first-time logins are additionally
//! serialized through [`SessionContext::login_gate`] so concurrent suites
//! cannot log in twice for the same role.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use serde::Deserialize;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::sync::MutexGuard;

use crate::error::SessionError;

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Account role used by the suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Customer account scoped to its company projects.
    Client,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// All roles in setup order.
    pub const ALL: [Self; 2] = [Self::Client, Self::Admin];

    /// Returns a stable label for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tokens
// ============================================================================

/// Opaque session token taken from the `token` cookie.
///
/// # Invariants
/// - `Debug` never prints the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token value for the cookie header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

// ============================================================================
// SECTION: Context
// ============================================================================

/// Token cache scoped to a single test run.
#[derive(Debug, Default)]
pub struct SessionContext {
    /// Cached tokens keyed by role.
    tokens: RwLock<BTreeMap<Role, SessionToken>>,
    /// Serializes first-time logins.
    login_gate: Mutex<()>,
}

impl SessionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token for a role, replacing any previous value.
    pub fn set(&self, role: Role, token: SessionToken) {
        if let Ok(mut guard) = self.tokens.write() {
            guard.insert(role, token);
        }
    }

    /// Returns the cached token for a role, if any.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<SessionToken> {
        self.tokens.read().map_or(None, |guard| guard.get(&role).cloned())
    }

    /// Returns the cached token for a role.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingToken`] when no token was cached.
    pub fn require(&self, role: Role) -> Result<SessionToken, SessionError> {
        self.get(role).ok_or(SessionError::MissingToken(role))
    }

    /// Returns true when a token is cached for the role.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.tokens.read().is_ok_and(|guard| guard.contains_key(&role))
    }

    /// Acquires the login gate used by suite setup.
    pub async fn login_gate(&self) -> MutexGuard<'_, ()> {
        self.login_gate.lock().await
    }
}
