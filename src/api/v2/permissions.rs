//
//  neon-api
//  api/v2/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project sharing.
//!
//! A project can be shared with other Neon users by email. Each grant is a
//! [`ProjectPermission`]; revoking it keeps the record with `revoked_at` set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::{ApiPath, Result};
use crate::api::NeonClient;

/// Access to a project granted to another user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPermission {
    pub id: String,

    pub granted_to_email: String,

    #[serde(default)]
    pub granted_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Response of `GET /projects/{project_id}/permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPermissions {
    pub project_permissions: Vec<ProjectPermission>,
}

/// Request body of `POST /projects/{project_id}/permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantPermissionRequest {
    pub email: String,
}

impl GrantPermissionRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl NeonClient {
    /// Lists who the project is shared with.
    ///
    /// `GET /projects/{project_id}/permissions`
    pub async fn project_permissions(&self, project_id: &str) -> Result<ProjectPermissions> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("permissions");

        self.get(&path).await
    }

    /// Shares the project with the user behind `request.email`.
    ///
    /// `POST /projects/{project_id}/permissions`
    pub async fn project_permissions_grant(
        &self,
        project_id: &str,
        request: &GrantPermissionRequest,
    ) -> Result<ProjectPermission> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("permissions");

        self.post(&path, request).await
    }

    /// Revokes a previously granted permission.
    ///
    /// `DELETE /projects/{project_id}/permissions/{permission_id}`
    pub async fn project_permissions_revoke(
        &self,
        project_id: &str,
        permission_id: &str,
    ) -> Result<ProjectPermission> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("permissions")
            .id("permission_id", permission_id)?;

        self.delete(&path).await
    }
}
