//
//  neon-api
//  api/v2/branches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Branch API types and methods.
//!
//! Branches are copy-on-write clones of a project's data. Every project has
//! one default (primary) branch; further branches fork from a parent at its
//! head, at an LSN, or at a point in time.
//!
//! # Example
//!
//! ```rust,no_run
//! use neon_api::api::v2::{BranchCreateRequest, EndpointType};
//! use neon_api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! let client = NeonClient::from_env()?;
//!
//! let request = BranchCreateRequest::named("preview-42").with_endpoint(EndpointType::ReadWrite);
//! let created = client.branch_create("shiny-wind-028834", &request).await?;
//!
//! println!("branch {} scheduled {} operations", created.branch.id, created.operations.len());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EndpointType, Operation};
use crate::api::common::{ApiPath, ListParams, Pagination, Result};
use crate::api::NeonClient;
use crate::util::find_by_key;

/// A branch of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch identifier, e.g. `br-wispy-meadow-118737`.
    pub id: String,

    /// The owning project. A plain identifier, not a live link.
    #[serde(default)]
    pub project_id: Option<String>,

    /// The branch this one was forked from; `None` for the root branch.
    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub parent_lsn: Option<String>,

    #[serde(default)]
    pub parent_timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub name: Option<String>,

    /// `init`, `ready`, `archived`, ...
    #[serde(default)]
    pub current_state: Option<String>,

    #[serde(default)]
    pub pending_state: Option<String>,

    /// Logical data size in bytes.
    #[serde(default)]
    pub logical_size: Option<u64>,

    #[serde(default)]
    pub creation_source: Option<String>,

    #[serde(default)]
    pub primary: Option<bool>,

    #[serde(default)]
    pub default: Option<bool>,

    #[serde(default)]
    pub protected: Option<bool>,

    #[serde(default)]
    pub cpu_used_sec: Option<u64>,

    #[serde(default)]
    pub compute_time_seconds: Option<u64>,

    #[serde(default)]
    pub active_time_seconds: Option<u64>,

    #[serde(default)]
    pub written_data_bytes: Option<u64>,

    #[serde(default)]
    pub data_transfer_bytes: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /projects/{project_id}/branches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchesResponse {
    pub branches: Vec<Branch>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl BranchesResponse {
    /// Finds a branch by id or by name.
    pub fn find(&self, key: &str) -> Option<&Branch> {
        find_by_key(&self.branches, key, |b| [Some(b.id.as_str()), b.name.as_deref()])
    }

    /// The project's default branch, if it is in this page.
    pub fn default_branch(&self) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|b| b.default == Some(true) || b.primary == Some(true))
    }
}

/// Response of `GET /projects/{project_id}/branches/{branch_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchResponse {
    pub branch: Branch,
}

/// Response of the mutating branch endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchOperations {
    pub branch: Branch,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Fields of a new branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchCreateSettings {
    /// Parent branch; defaults to the project's default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fork at this LSN instead of the parent's head.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_lsn: Option<String>,

    /// Fork at this point in time instead of the parent's head.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

/// A compute endpoint to create together with the branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchEndpointSettings {
    #[serde(rename = "type")]
    pub endpoint_type: EndpointType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_min_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_max_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_timeout_seconds: Option<i64>,
}

/// Request body of `POST /projects/{project_id}/branches`.
///
/// Without endpoints the new branch has no compute and cannot be connected
/// to until one is added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchCreateSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<BranchEndpointSettings>,
}

impl BranchCreateRequest {
    /// A request for a branch called `name` off the default branch.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            branch: Some(BranchCreateSettings {
                name: Some(name.into()),
                ..Default::default()
            }),
            endpoints: Vec::new(),
        }
    }

    /// Forks from `parent_id` instead of the default branch.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.branch.get_or_insert_with(Default::default).parent_id = Some(parent_id.into());
        self
    }

    /// Also creates a compute endpoint of the given type.
    pub fn with_endpoint(mut self, endpoint_type: EndpointType) -> Self {
        self.endpoints.push(BranchEndpointSettings {
            endpoint_type,
            autoscaling_limit_min_cu: None,
            autoscaling_limit_max_cu: None,
            suspend_timeout_seconds: None,
        });
        self
    }
}

/// Fields that can be changed on an existing branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchUpdateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

/// Request body of `PATCH /projects/{project_id}/branches/{branch_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchUpdateRequest {
    pub branch: BranchUpdateSettings,
}

impl BranchUpdateRequest {
    /// A request renaming the branch.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            branch: BranchUpdateSettings {
                name: Some(name.into()),
                protected: None,
            },
        }
    }
}

fn branch_path(project_id: &str, branch_id: &str) -> Result<ApiPath> {
    ApiPath::new("projects")
        .id("project_id", project_id)?
        .push("branches")
        .id("branch_id", branch_id)
}

impl NeonClient {
    /// Lists the branches of a project.
    ///
    /// `GET /projects/{project_id}/branches`
    pub async fn branches(&self, project_id: &str, params: &ListParams) -> Result<BranchesResponse> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("branches");

        self.get_with_query(&path, &params.to_query()).await
    }

    /// Gets one branch.
    ///
    /// `GET /projects/{project_id}/branches/{branch_id}`
    pub async fn branch(&self, project_id: &str, branch_id: &str) -> Result<BranchResponse> {
        self.get(&branch_path(project_id, branch_id)?).await
    }

    /// Creates a branch.
    ///
    /// `POST /projects/{project_id}/branches`
    pub async fn branch_create(
        &self,
        project_id: &str,
        request: &BranchCreateRequest,
    ) -> Result<BranchOperations> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("branches");

        self.post(&path, request).await
    }

    /// Updates a branch.
    ///
    /// `PATCH /projects/{project_id}/branches/{branch_id}`
    pub async fn branch_update(
        &self,
        project_id: &str,
        branch_id: &str,
        request: &BranchUpdateRequest,
    ) -> Result<BranchOperations> {
        self.patch(&branch_path(project_id, branch_id)?, request).await
    }

    /// Deletes a branch.
    ///
    /// `DELETE /projects/{project_id}/branches/{branch_id}`
    pub async fn branch_delete(&self, project_id: &str, branch_id: &str) -> Result<BranchOperations> {
        self.delete(&branch_path(project_id, branch_id)?).await
    }

    /// Makes a branch the project's default branch.
    ///
    /// `POST /projects/{project_id}/branches/{branch_id}/set_as_primary`
    pub async fn branch_set_as_primary(
        &self,
        project_id: &str,
        branch_id: &str,
    ) -> Result<BranchOperations> {
        let path = branch_path(project_id, branch_id)?.push("set_as_primary");
        self.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body() {
        let request = BranchCreateRequest::named("dev")
            .parent("br-parent")
            .with_endpoint(EndpointType::ReadWrite);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "branch": {"parent_id": "br-parent", "name": "dev"},
                "endpoints": [{"type": "read_write"}]
            })
        );
    }

    #[test]
    fn test_empty_create_request_is_empty_object() {
        assert_eq!(
            serde_json::to_value(BranchCreateRequest::default()).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_default_branch_lookup() {
        let response: BranchesResponse = serde_json::from_str(
            r#"{"branches": [
                {"id": "br-2", "name": "dev", "default": false},
                {"id": "br-1", "name": "main", "default": true}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.default_branch().map(|b| b.id.as_str()), Some("br-1"));
        assert_eq!(response.find("dev").map(|b| b.id.as_str()), Some("br-2"));
    }
}
