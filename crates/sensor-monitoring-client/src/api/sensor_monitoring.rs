// crates/sensor-monitoring-client/src/api/sensor_monitoring.rs
// ============================================================================
// Module: Sensor Monitoring API
// Description: Project, group, and sensor wrappers.
// Purpose: Type the project-node endpoints used by the monitoring suites.
// Dependencies: crate::transport, serde_json
// ============================================================================

//! ## Overview
//! Every method takes the session token explicitly and performs one call.
//! List methods return [`Paged`] values whose pagination block is zeroed when
//! the backend omits it or the call degraded.

use serde_json::Value;

use crate::endpoint;
use crate::envelope::Envelope;
use crate::envelope::Paged;
use crate::models::CreateGroupRequest;
use crate::models::CreateProjectRequest;
use crate::models::EditGroupRequest;
use crate::models::EditProjectRequest;
use crate::models::EditSensorRequest;
use crate::models::Group;
use crate::models::ListGroupsParams;
use crate::models::ListProjectsParams;
use crate::models::Project;
use crate::models::Sensor;
use crate::session::SessionToken;
use crate::transport::ApiClient;
use crate::transport::Call;

/// Project, group, and sensor wrapper.
#[derive(Debug, Clone, Copy)]
pub struct SensorMonitoringApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SensorMonitoringApi<'a> {
    /// Wraps a client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
        }
    }

    // ------------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------------

    /// Creates a project under `company_id`.
    pub async fn create_project(
        &self,
        company_id: &str,
        token: &SessionToken,
        request: &CreateProjectRequest,
    ) -> Envelope<Project> {
        let call =
            Call::new().param("companyId", company_id).token(token).body(request);
        self.client.single(&endpoint::CREATE_PROJECT, call).await
    }

    /// Fetches one project of a company.
    pub async fn get_project(
        &self,
        company_id: &str,
        project_id: &str,
        token: &SessionToken,
    ) -> Envelope<Project> {
        let call = Call::new()
            .param("companyId", company_id)
            .param("projectId", project_id)
            .token(token);
        self.client.single(&endpoint::GET_PROJECT, call).await
    }

    /// Updates a project's name or description.
    pub async fn edit_project(
        &self,
        project_id: &str,
        token: &SessionToken,
        request: &EditProjectRequest,
    ) -> Envelope<Project> {
        let call = Call::new().param("projectId", project_id).token(token).body(request);
        self.client.single(&endpoint::EDIT_PROJECT, call).await
    }

    /// Lists projects visible to the token.
    pub async fn list_projects(
        &self,
        token: &SessionToken,
        params: &ListProjectsParams,
    ) -> Paged<Project> {
        let call = Call::new().token(token).query(params.query_pairs());
        self.client.paged(&endpoint::LIST_PROJECTS, call).await
    }

    /// Deletes a project.
    pub async fn delete_project(&self, project_id: &str, token: &SessionToken) -> Envelope<Value> {
        let call = Call::new().param("projectId", project_id).token(token);
        self.client.single(&endpoint::DELETE_PROJECT, call).await
    }

    // ------------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------------

    /// Creates a sensor group in a project.
    pub async fn create_group(
        &self,
        project_id: &str,
        token: &SessionToken,
        request: &CreateGroupRequest,
    ) -> Envelope<Group> {
        let call = Call::new().param("projectId", project_id).token(token).body(request);
        self.client.single(&endpoint::CREATE_GROUP, call).await
    }

    /// Lists the groups of a project.
    pub async fn list_groups(
        &self,
        project_id: &str,
        token: &SessionToken,
        params: &ListGroupsParams,
    ) -> Paged<Group> {
        let call =
            Call::new().param("projectId", project_id).token(token).query(params.query_pairs());
        self.client.paged(&endpoint::LIST_GROUPS, call).await
    }

    /// Updates a group's name or description.
    pub async fn edit_group(
        &self,
        project_id: &str,
        group_id: &str,
        token: &SessionToken,
        request: &EditGroupRequest,
    ) -> Envelope<Group> {
        let call = Call::new()
            .param("projectId", project_id)
            .param("groupId", group_id)
            .token(token)
            .body(request);
        self.client.single(&endpoint::EDIT_GROUP, call).await
    }

    /// Deletes a group.
    pub async fn delete_group(
        &self,
        project_id: &str,
        group_id: &str,
        token: &SessionToken,
    ) -> Envelope<Value> {
        let call = Call::new().param("projectId", project_id).param("groupId", group_id).token(token);
        self.client.single(&endpoint::DELETE_GROUP, call).await
    }

    // ------------------------------------------------------------------------
    // Sensors
    // ------------------------------------------------------------------------

    /// Updates a sensor attached to a node.
    pub async fn edit_sensor(
        &self,
        node_id: &str,
        sensor_id: &str,
        token: &SessionToken,
        request: &EditSensorRequest,
    ) -> Envelope<Sensor> {
        let call = Call::new()
            .param("nodeId", node_id)
            .param("sensorId", sensor_id)
            .token(token)
            .body(request);
        self.client.single(&endpoint::EDIT_SENSOR, call).await
    }
}
