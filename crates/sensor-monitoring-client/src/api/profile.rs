// crates/sensor-monitoring-client/src/api/profile.rs
// ============================================================================
// Module: Profile API
// Description: Current-user profile wrapper.
// Purpose: Fetch the profile bound to a session token.
// Dependencies: crate::transport
// ============================================================================

use crate::endpoint;
use crate::envelope::Envelope;
use crate::envelope::EnvelopeOrigin;
use crate::envelope::RawEnvelope;
use crate::models::UserData;
use crate::session::Role;
use crate::session::SessionContext;
use crate::session::SessionToken;
use crate::transport::ApiClient;
use crate::transport::Call;

/// Profile wrapper.
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    /// Wraps a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
        }
    }

    /// `GET /api/users/profiles`.
    pub async fn get_profiles(&self, token: &SessionToken) -> Envelope<UserData> {
        self.client.single(&endpoint::GET_PROFILES, Call::new().token(token)).await
    }

    /// Fetches the profile using the token cached for `role`.
    ///
    /// Without a cached token no request is sent and a 401 envelope is
    /// returned.
    pub async fn get_profiles_as(
        &self,
        role: Role,
        session: &SessionContext,
    ) -> Envelope<UserData> {
        match session.require(role) {
            Ok(token) => self.get_profiles(&token).await,
            Err(err) => {
                tracing::warn!(role = %role, "profile request skipped without session token");
                Envelope::from_raw(
                    RawEnvelope::missing_session(endpoint::GET_PROFILES.operation, &err.to_string()),
                    EnvelopeOrigin::TransportFailure,
                )
            }
        }
    }
}
