// system-tests/tests/suites/profile.rs
// ============================================================================
// Module: Profile Suite
// Description: Live profile checks using tokens from suite setup.
// Purpose: Verify each role's token resolves to that role's profile.
// Dependencies: system-tests helpers, sensor-monitoring-client
// ============================================================================

use std::error::Error;

use helpers::artifacts::TestReporter;
use helpers::session::ensure_logged_in;
use helpers::session::suite_context;
use sensor_monitoring_client::ProfileApi;
use sensor_monitoring_client::Role;
use system_tests::config::API_MESSAGES;
use system_tests::config::API_RESPONSE_CODES;
use system_tests::config::ENVIRONMENT;

use crate::helpers;

async fn profile_matches_role(test_name: &str, role: Role) -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new(test_name)?;
    let suite = suite_context()?;
    let (session, report) = ensure_logged_in(&suite.config).await?;

    let response = ProfileApi::new(&suite.client).get_profiles_as(role, session).await;
    reporter.attach_response("response_body", response.raw())?;

    assert_eq!(response.code, API_RESPONSE_CODES.success);
    assert!(response.status);
    assert_eq!(response.message, API_MESSAGES.success);
    let user = response.data.data().ok_or("profile data did not decode")?;
    assert!(!user.id.is_empty());
    assert!(!user.name.is_empty());
    assert!(!user.username.is_empty());
    assert!(!user.email.is_empty());
    assert_eq!(user.status, ENVIRONMENT.active_status);
    assert!(!user.role.id.is_empty());
    assert_eq!(user.role.name, ENVIRONMENT.role_name(role));
    assert!(response.raw_data()["projects"].is_array());
    if role == Role::Client {
        assert!(user.has_project(ENVIRONMENT.default_project));
    }

    reporter.attach_transcript(&suite.client)?;
    reporter.finish("pass", vec![
        format!("{role} token resolves to the {} profile", ENVIRONMENT.role_name(role)),
        format!("setup performed {} login(s)", report.logins()),
    ])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn client_profile_with_client_token() -> Result<(), Box<dyn Error>> {
    profile_matches_role("client_profile_with_client_token", Role::Client).await
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_profile_with_admin_token() -> Result<(), Box<dyn Error>> {
    profile_matches_role("admin_profile_with_admin_token", Role::Admin).await
}
