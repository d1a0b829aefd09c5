// system-tests/tests/suites/login.rs
// ============================================================================
// Module: Login Suite
// Description: Live login checks for the customer and administrator accounts.
// Purpose: Verify success, unknown-user, and wrong-password envelopes.
// Dependencies: system-tests helpers, sensor-monitoring-client
// ============================================================================

//! ## Overview
//! Each role is exercised three ways: valid credentials, an unknown username,
//! and a wrong password. Successful logins also cache the session token in
//! the binary-wide session context.

use std::error::Error;

use helpers::artifacts::TestReporter;
use helpers::session::shared_session;
use helpers::session::suite_context;
use sensor_monitoring_client::AuthApi;
use sensor_monitoring_client::Envelope;
use sensor_monitoring_client::Role;
use sensor_monitoring_client::models::UserData;
use serde_json::Value;
use system_tests::config::API_MESSAGES;
use system_tests::config::API_RESPONSE_CODES;
use system_tests::config::Credential;
use system_tests::config::ENVIRONMENT;

use crate::helpers;

/// Returns true when the raw payload carries the fields of a user record.
fn is_user_record(data: &Value) -> bool {
    data.as_object().is_some_and(|object| {
        ["username", "id", "role", "projects"].iter().all(|key| object.contains_key(*key))
    })
}

fn assert_rejected(response: &Envelope<UserData>, code: u16, message: &str) {
    assert_eq!(response.code, code);
    assert!(!response.status);
    assert_eq!(response.message, message);
    assert_eq!(response.data.error_message(), Some(message));
}

async fn login_succeeds(test_name: &str, role: Role, credential: Credential) -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new(test_name)?;
    let suite = suite_context()?;

    let response = AuthApi::new(&suite.client).login(&credential.login_request()).await;
    reporter.attach_response("response_body", response.raw())?;

    assert_eq!(response.code, API_RESPONSE_CODES.success);
    assert!(response.status);
    assert_eq!(response.message, API_MESSAGES.success);
    assert!(is_user_record(response.raw_data()), "response data is not a user record");
    let user = response.data.data().ok_or("user data did not decode")?;
    assert_eq!(user.username, credential.username);
    assert!(!user.id.is_empty());
    assert_eq!(user.status, ENVIRONMENT.active_status);
    assert_eq!(user.role.name, ENVIRONMENT.role_name(role));
    if role == Role::Client {
        assert!(user.has_project(ENVIRONMENT.default_project));
    }
    tracing::info!(id = %user.id, username = %user.username, role = %user.role.name, "logged in");

    let token = suite.client.session_token().ok_or("login set no token cookie")?;
    shared_session().set(role, token);
    assert!(shared_session().get(role).is_some());

    reporter.attach_transcript(&suite.client)?;
    reporter.finish("pass", vec![format!("{role} login returns user record and token")])?;
    Ok(())
}

async fn login_rejected(
    test_name: &str,
    credential: Credential,
    code: u16,
    message: &str,
) -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new(test_name)?;
    let suite = suite_context()?;

    let response = AuthApi::new(&suite.client).login(&credential.login_request()).await;
    reporter.attach_response("response_body", response.raw())?;
    assert_rejected(&response, code, message);
    assert!(suite.client.session_token().is_none());

    reporter.finish("pass", vec![format!("login rejected with {code}: {message}")])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn client_login_with_valid_credentials() -> Result<(), Box<dyn Error>> {
    login_succeeds("client_login_with_valid_credentials", Role::Client, ENVIRONMENT.valid_user).await
}

#[tokio::test(flavor = "multi_thread")]
async fn client_login_with_unknown_user() -> Result<(), Box<dyn Error>> {
    login_rejected(
        "client_login_with_unknown_user",
        ENVIRONMENT.nonexistent_user,
        API_RESPONSE_CODES.not_found,
        API_MESSAGES.user_not_found,
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn client_login_with_wrong_password() -> Result<(), Box<dyn Error>> {
    login_rejected(
        "client_login_with_wrong_password",
        ENVIRONMENT.wrong_password,
        API_RESPONSE_CODES.bad_request,
        API_MESSAGES.password_incorrect,
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_login_with_valid_credentials() -> Result<(), Box<dyn Error>> {
    login_succeeds("admin_login_with_valid_credentials", Role::Admin, ENVIRONMENT.valid_admin).await
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_login_with_unknown_user() -> Result<(), Box<dyn Error>> {
    login_rejected(
        "admin_login_with_unknown_user",
        ENVIRONMENT.nonexistent_admin,
        API_RESPONSE_CODES.not_found,
        API_MESSAGES.user_not_found,
    )
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_login_with_wrong_password() -> Result<(), Box<dyn Error>> {
    login_rejected(
        "admin_login_with_wrong_password",
        ENVIRONMENT.wrong_password_admin,
        API_RESPONSE_CODES.bad_request,
        API_MESSAGES.password_incorrect,
    )
    .await
}
