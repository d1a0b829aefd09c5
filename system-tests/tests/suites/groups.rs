// system-tests/tests/suites/groups.rs
// ============================================================================
// Module: Group Suite
// Description: Live sensor-group lifecycle inside a throwaway project.
// Purpose: Verify group CRUD envelopes and group listing.
// Dependencies: system-tests helpers, sensor-monitoring-client
// ============================================================================

use std::error::Error;

use helpers::artifacts::TestReporter;
use helpers::session::ensure_logged_in;
use helpers::session::suite_context;
use sensor_monitoring_client::Role;
use sensor_monitoring_client::SensorMonitoringApi;
use sensor_monitoring_client::models::CreateGroupRequest;
use sensor_monitoring_client::models::CreateProjectRequest;
use sensor_monitoring_client::models::EditGroupRequest;
use sensor_monitoring_client::models::ListGroupsParams;
use system_tests::config::API_RESPONSE_CODES;
use system_tests::config::SystemTestEnv;

use crate::helpers;
use crate::projects::unique_code;

#[tokio::test(flavor = "multi_thread")]
async fn group_lifecycle() -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new("group_lifecycle")?;
    let suite = suite_context()?;
    let Some(company_id) = suite.config.company_id.clone() else {
        reporter.finish("skipped", vec![format!("{} not set", SystemTestEnv::CompanyId.as_str())])?;
        return Ok(());
    };
    let (session, _) = ensure_logged_in(&suite.config).await?;
    let token = session.require(Role::Admin)?;
    let api = SensorMonitoringApi::new(&suite.client);
    let project = unique_code("QA-GRP");

    let created_project = api
        .create_project(
            &company_id,
            &token,
            &CreateProjectRequest {
                code: project.clone(),
                name: format!("QA groups {project}"),
                description: None,
            },
        )
        .await;
    assert!(created_project.status, "project setup failed: {}", created_project.message);

    let created = api
        .create_group(
            &project,
            &token,
            &CreateGroupRequest {
                name: "Line A".to_string(),
                description: Some("created by system-tests".to_string()),
            },
        )
        .await;
    reporter.attach_response("create_group", created.raw())?;
    assert!(created.status, "create group failed: {}", created.message);
    let group_id = created.data.data().map(|group| group.id.clone()).ok_or("group id missing")?;

    let listed = api
        .list_groups(
            &project,
            &token,
            &ListGroupsParams {
                page: Some(1),
                limit: Some(10),
                search: None,
            },
        )
        .await;
    reporter.attach_response("list_groups", listed.envelope.raw())?;
    assert_eq!(listed.envelope.code, API_RESPONSE_CODES.success);
    assert!(listed.items().iter().any(|group| group.id == group_id));

    let edited = api
        .edit_group(
            &project,
            &group_id,
            &token,
            &EditGroupRequest {
                name: Some("Line A renamed".to_string()),
                description: None,
            },
        )
        .await;
    reporter.attach_response("edit_group", edited.raw())?;
    assert!(edited.status, "edit group failed: {}", edited.message);

    let deleted = api.delete_group(&project, &group_id, &token).await;
    reporter.attach_response("delete_group", deleted.raw())?;
    assert_eq!(deleted.code, API_RESPONSE_CODES.success);

    let cleanup = api.delete_project(&project, &token).await;
    assert!(cleanup.status, "project cleanup failed: {}", cleanup.message);

    reporter.attach_transcript(&suite.client)?;
    reporter.finish("pass", vec![format!("group {group_id} lifecycle in project {project}")])?;
    Ok(())
}
