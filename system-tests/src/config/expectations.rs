// system-tests/src/config/expectations.rs
// ============================================================================
// Module: Expected Responses
// Description: Messages and codes the backend is expected to return.
// Purpose: Keep assertion literals out of individual suites.
// Dependencies: none
// ============================================================================

/// Expected envelope messages.
#[derive(Debug, Clone, Copy)]
pub struct ApiMessages {
    /// Any successful call.
    pub success: &'static str,
    /// Login with an unknown username.
    pub user_not_found: &'static str,
    /// Login with a wrong password.
    pub password_incorrect: &'static str,
}

/// Expected envelope codes.
#[derive(Debug, Clone, Copy)]
pub struct ApiResponseCodes {
    /// Success.
    pub success: u16,
    /// Rejected input, including a wrong password.
    pub bad_request: u16,
    /// Unknown resource or user.
    pub not_found: u16,
    /// Missing or invalid session.
    pub unauthorized: u16,
}

/// Messages asserted by the suites.
pub const API_MESSAGES: ApiMessages = ApiMessages {
    success: "success",
    user_not_found: "User not found",
    password_incorrect: "Password incorrect",
};

/// Codes asserted by the suites.
pub const API_RESPONSE_CODES: ApiResponseCodes = ApiResponseCodes {
    success: 200,
    bad_request: 400,
    not_found: 404,
    unauthorized: 401,
};
