//
//  neon-api
//  api/v2/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project API types and methods.
//!
//! A project is the top-level Neon resource. It owns branches, and through
//! them databases, roles and compute endpoints. Creating a project also
//! creates a default branch, a read-write endpoint, an owner role and a
//! database, all of which are returned by [`NeonClient::project_create`].
//!
//! # Project Hierarchy
//!
//! ```text
//! Project
//! ├── Branches
//! │   ├── Databases
//! │   └── Roles
//! ├── Endpoints (each attached to one branch)
//! ├── Operations
//! └── Permissions (users the project is shared with)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use neon_api::api::v2::{ProjectCreateRequest, ProjectListParams};
//! use neon_api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! let client = NeonClient::from_env()?;
//!
//! let created = client
//!     .project_create(&ProjectCreateRequest::named("analytics").region("aws-us-east-2"))
//!     .await?;
//! println!("created {} ({} operations)", created.project.id, created.operations.len());
//!
//! let listing = client.projects(&ProjectListParams::default()).await?;
//! if let Some(project) = listing.find("analytics") {
//!     println!("found {}", project.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Project IDs are generated words such as `shiny-wind-028834`
//! - Deleting a project deletes everything it owns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Branch, Database, Endpoint, Operation, Role};
use crate::api::common::{ApiError, ApiPath, Pagination, QueryParams, Result};
use crate::api::NeonClient;
use crate::util::find_by_key;

/// A Neon project.
///
/// Only `id` is guaranteed; every other field is filled in when the server
/// sends it. Fields the client does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier, e.g. `shiny-wind-028834`.
    pub id: String,

    /// Human-readable project name.
    #[serde(default)]
    pub name: Option<String>,

    /// Region the project lives in, e.g. `aws-us-east-2`.
    #[serde(default)]
    pub region_id: Option<String>,

    /// Cloud platform, e.g. `aws`.
    #[serde(default)]
    pub platform_id: Option<String>,

    /// Compute provisioner (`k8s-pod` or `k8s-neonvm`).
    #[serde(default)]
    pub provisioner: Option<String>,

    /// Major Postgres version.
    #[serde(default)]
    pub pg_version: Option<u32>,

    /// Hostname suffix endpoints are reachable under.
    #[serde(default)]
    pub proxy_host: Option<String>,

    /// Whether role passwords are stored and can be revealed.
    #[serde(default)]
    pub store_passwords: Option<bool>,

    /// Point-in-time restore window in seconds.
    #[serde(default)]
    pub history_retention_seconds: Option<u64>,

    #[serde(default)]
    pub owner_id: Option<String>,

    #[serde(default)]
    pub org_id: Option<String>,

    #[serde(default)]
    pub creation_source: Option<String>,

    /// Project-level settings (quotas, allowed IPs, ...), passed through as-is.
    #[serde(default)]
    pub settings: Option<Value>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the project list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl ProjectsResponse {
    /// Finds a project by id or by name.
    pub fn find(&self, key: &str) -> Option<&Project> {
        find_by_key(&self.projects, key, |p| [Some(p.id.as_str()), p.name.as_deref()])
    }
}

/// Connection string returned alongside a newly created project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDetails {
    pub connection_uri: String,

    /// Host, port, database, role and password, passed through as-is.
    #[serde(default)]
    pub connection_parameters: Option<Value>,
}

/// Response of the single-project endpoints.
///
/// `project_create` additionally fills in the resources created with the
/// project; the other endpoints leave those collections empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: Project,

    #[serde(default)]
    pub operations: Vec<Operation>,

    #[serde(default)]
    pub branch: Option<Branch>,

    #[serde(default)]
    pub endpoints: Vec<Endpoint>,

    #[serde(default)]
    pub databases: Vec<Database>,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub connection_uris: Vec<ConnectionDetails>,
}

/// Settings for the default branch of a new project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectBranchSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

/// Fields of a new project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_passwords: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_retention_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<ProjectBranchSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_min_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_max_cu: Option<f64>,
}

/// Request body of `POST /projects`.
///
/// An empty request is valid: Neon picks a name and region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreateRequest {
    pub project: ProjectCreateSettings,
}

impl ProjectCreateRequest {
    /// A request for a project called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            project: ProjectCreateSettings {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    /// Places the project in `region_id`.
    pub fn region(mut self, region_id: impl Into<String>) -> Self {
        self.project.region_id = Some(region_id.into());
        self
    }

    /// Selects the major Postgres version.
    pub fn pg_version(mut self, version: u32) -> Self {
        self.project.pg_version = Some(version);
        self
    }
}

/// Fields that can be changed on an existing project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_retention_seconds: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Request body of `PATCH /projects/{project_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdateRequest {
    pub project: ProjectUpdateSettings,
}

impl ProjectUpdateRequest {
    /// A request renaming the project.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            project: ProjectUpdateSettings {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }
}

/// Query parameters of the project list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListParams {
    /// List projects shared with the caller instead of owned ones.
    pub shared: bool,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    /// Filter by project name or id (partial match).
    pub search: Option<String>,
    pub org_id: Option<String>,
}

impl ProjectListParams {
    /// Parameters for the shared-projects listing.
    pub fn shared() -> Self {
        Self {
            shared: true,
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("cursor", self.cursor.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("search", self.search.as_deref())
            .push_opt("org_id", self.org_id.as_deref())
    }
}

/// A connection string for one database/role pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionUri {
    pub uri: String,
}

/// Query parameters of `GET /projects/{project_id}/connection_uri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUriParams {
    pub database_name: String,
    pub role_name: String,
    /// Defaults to the project's default branch.
    pub branch_id: Option<String>,
    /// Defaults to the branch's read-write endpoint.
    pub endpoint_id: Option<String>,
    /// Return the pooled (PgBouncer) connection string.
    pub pooled: bool,
}

impl ConnectionUriParams {
    pub fn new(database_name: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            role_name: role_name.into(),
            branch_id: None,
            endpoint_id: None,
            pooled: false,
        }
    }

    pub fn pooled(mut self, pooled: bool) -> Self {
        self.pooled = pooled;
        self
    }

    pub fn branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    pub fn endpoint(mut self, endpoint_id: impl Into<String>) -> Self {
        self.endpoint_id = Some(endpoint_id.into());
        self
    }

    fn to_query(&self) -> Result<QueryParams> {
        if self.database_name.trim().is_empty() {
            return Err(ApiError::MissingParameter("database_name"));
        }
        if self.role_name.trim().is_empty() {
            return Err(ApiError::MissingParameter("role_name"));
        }

        Ok(QueryParams::new()
            .push_opt("branch_id", self.branch_id.as_deref())
            .push_opt("endpoint_id", self.endpoint_id.as_deref())
            .push("database_name", &self.database_name)
            .push("role_name", &self.role_name)
            .push_opt("pooled", self.pooled.then_some(true)))
    }
}

impl NeonClient {
    /// Lists projects owned by (or, with `shared`, shared with) the caller.
    ///
    /// `GET /projects` or `GET /projects/shared`
    pub async fn projects(&self, params: &ProjectListParams) -> Result<ProjectsResponse> {
        let path = if params.shared {
            ApiPath::new("projects").push("shared")
        } else {
            ApiPath::new("projects")
        };

        self.get_with_query(&path, &params.to_query()).await
    }

    /// Gets one project.
    ///
    /// `GET /projects/{project_id}`
    pub async fn project(&self, project_id: &str) -> Result<ProjectResponse> {
        let path = ApiPath::new("projects").id("project_id", project_id)?;
        self.get(&path).await
    }

    /// Creates a project together with its default branch, endpoint, role
    /// and database.
    ///
    /// `POST /projects`
    pub async fn project_create(&self, request: &ProjectCreateRequest) -> Result<ProjectResponse> {
        self.post(&ApiPath::new("projects"), request).await
    }

    /// Updates a project.
    ///
    /// `PATCH /projects/{project_id}`
    pub async fn project_update(
        &self,
        project_id: &str,
        request: &ProjectUpdateRequest,
    ) -> Result<ProjectResponse> {
        let path = ApiPath::new("projects").id("project_id", project_id)?;
        self.patch(&path, request).await
    }

    /// Deletes a project and everything it owns.
    ///
    /// `DELETE /projects/{project_id}`
    pub async fn project_delete(&self, project_id: &str) -> Result<ProjectResponse> {
        let path = ApiPath::new("projects").id("project_id", project_id)?;
        self.delete(&path).await
    }

    /// Gets a connection string for a database/role pair.
    ///
    /// `GET /projects/{project_id}/connection_uri`
    pub async fn connection_uri(
        &self,
        project_id: &str,
        params: &ConnectionUriParams,
    ) -> Result<ConnectionUri> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("connection_uri");

        self.get_with_query(&path, &params.to_query()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_minimal_body() {
        let project: Project = serde_json::from_str(r#"{"id": "p1"}"#).unwrap();

        assert_eq!(project.id, "p1");
        assert_eq!(project.name, None);
        assert!(project.extra.is_empty());
    }

    #[test]
    fn test_project_keeps_unknown_fields() {
        let project: Project =
            serde_json::from_str(r#"{"id": "p1", "maintenance_starts_at": null, "cpu_used_sec": 42}"#)
                .unwrap();

        assert_eq!(project.extra["cpu_used_sec"], 42);
        assert!(project.extra.contains_key("maintenance_starts_at"));

        let round_trip = serde_json::to_value(&project).unwrap();
        assert_eq!(round_trip["cpu_used_sec"], 42);
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let body = serde_json::to_value(ProjectCreateRequest::named("demo").pg_version(16)).unwrap();
        assert_eq!(body, serde_json::json!({"project": {"name": "demo", "pg_version": 16}}));
    }

    #[test]
    fn test_projects_find_by_id_or_name() {
        let response: ProjectsResponse = serde_json::from_str(
            r#"{"projects": [{"id": "p1", "name": "alpha"}, {"id": "p2", "name": "beta"}]}"#,
        )
        .unwrap();

        assert_eq!(response.find("beta").map(|p| p.id.as_str()), Some("p2"));
        assert_eq!(response.find("p1").and_then(|p| p.name.as_deref()), Some("alpha"));
        assert!(response.find("gamma").is_none());
        assert!(response.pagination.is_none());
    }

    #[test]
    fn test_connection_uri_query() {
        let query = ConnectionUriParams::new("neondb", "neondb_owner")
            .pooled(true)
            .to_query()
            .unwrap();

        assert_eq!(
            query.as_pairs(),
            &[
                ("database_name".to_string(), "neondb".to_string()),
                ("role_name".to_string(), "neondb_owner".to_string()),
                ("pooled".to_string(), "true".to_string()),
            ]
        );

        let unpooled = ConnectionUriParams::new("neondb", "neondb_owner").to_query().unwrap();
        assert_eq!(unpooled.as_pairs().len(), 2);
    }

    #[test]
    fn test_connection_uri_requires_names() {
        let err = ConnectionUriParams::new("", "owner").to_query().unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("database_name")));
    }
}
