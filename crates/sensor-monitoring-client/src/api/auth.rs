// crates/sensor-monitoring-client/src/api/auth.rs
// ============================================================================
// Module: Auth API
// Description: Login wrapper.
// Purpose: Exchange credentials for a session cookie and user record.
// Dependencies: crate::transport
// ============================================================================

//! ## Overview
//! A successful login sets the `token` cookie on the calling client;
//! read it back with [`crate::ApiClient::session_token`].

use crate::endpoint;
use crate::envelope::Envelope;
use crate::models::LoginRequest;
use crate::models::UserData;
use crate::session::Role;
use crate::setup::RoleCredentials;
use crate::transport::ApiClient;
use crate::transport::Call;

/// Login wrapper.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    /// Wraps a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
        }
    }

    /// `POST /api/auth/login`.
    pub async fn login(&self, request: &LoginRequest) -> Envelope<UserData> {
        self.client.single(&endpoint::LOGIN, Call::new().body(request)).await
    }

    /// Logs in with the credentials configured for `role`.
    pub async fn login_as(&self, role: Role, credentials: &RoleCredentials) -> Envelope<UserData> {
        tracing::debug!(role = %role, "logging in");
        self.login(credentials.for_role(role)).await
    }
}
