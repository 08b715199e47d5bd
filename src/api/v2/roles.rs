//
//  neon-api
//  api/v2/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Postgres roles on a branch.
//!
//! Role names are user supplied and may contain characters that need
//! escaping in a URL path (`app user`, `svc/ro`); the dispatcher encodes
//! each path segment, so callers pass names as they are.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Operation;
use crate::api::common::{ApiError, ApiPath, Result};
use crate::api::NeonClient;

/// A Postgres role. `Debug` masks the password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub branch_id: Option<String>,

    pub name: String,

    /// Only present right after creation or a password reset.
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub protected: Option<bool>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Debug for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Role")
            .field("branch_id", &self.branch_id)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("protected", &self.protected)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("extra", &self.extra)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
}

impl RolesResponse {
    pub fn find(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleOperations {
    pub role: Role,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Response of the reveal-password endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePassword {
    pub password: String,
}

impl std::fmt::Debug for RolePassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RolePassword")
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCreateSettings {
    pub name: String,
}

/// Request body of `POST .../roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCreateRequest {
    pub role: RoleCreateSettings,
}

impl RoleCreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            role: RoleCreateSettings { name: name.into() },
        }
    }
}

fn roles_path(project_id: &str, branch_id: &str) -> Result<ApiPath> {
    Ok(ApiPath::new("projects")
        .id("project_id", project_id)?
        .push("branches")
        .id("branch_id", branch_id)?
        .push("roles"))
}

impl NeonClient {
    /// `GET /projects/{project_id}/branches/{branch_id}/roles`
    pub async fn roles(&self, project_id: &str, branch_id: &str) -> Result<RolesResponse> {
        self.get(&roles_path(project_id, branch_id)?).await
    }

    /// `GET /projects/{project_id}/branches/{branch_id}/roles/{role_name}`
    pub async fn role(
        &self,
        project_id: &str,
        branch_id: &str,
        role_name: &str,
    ) -> Result<RoleResponse> {
        let path = roles_path(project_id, branch_id)?.id("role_name", role_name)?;
        self.get(&path).await
    }

    /// Creates a role called `role_name`. The generated password is in the
    /// returned role. An empty name fails before any request.
    ///
    /// `POST /projects/{project_id}/branches/{branch_id}/roles`
    pub async fn role_create(
        &self,
        project_id: &str,
        branch_id: &str,
        role_name: &str,
    ) -> Result<RoleOperations> {
        let path = roles_path(project_id, branch_id)?;
        if role_name.trim().is_empty() {
            return Err(ApiError::MissingParameter("role_name"));
        }
        let request = RoleCreateRequest::new(role_name);
        self.post(&path, &request).await
    }

    /// `DELETE /projects/{project_id}/branches/{branch_id}/roles/{role_name}`
    pub async fn role_delete(
        &self,
        project_id: &str,
        branch_id: &str,
        role_name: &str,
    ) -> Result<RoleOperations> {
        let path = roles_path(project_id, branch_id)?.id("role_name", role_name)?;
        self.delete(&path).await
    }

    /// Reveals the stored password of a role.
    ///
    /// `GET /projects/{project_id}/branches/{branch_id}/roles/{role_name}/reveal_password`
    pub async fn role_password_reveal(
        &self,
        project_id: &str,
        branch_id: &str,
        role_name: &str,
    ) -> Result<RolePassword> {
        let path = roles_path(project_id, branch_id)?
            .id("role_name", role_name)?
            .push("reveal_password");
        self.get(&path).await
    }

    /// Generates a new password for a role.
    ///
    /// `POST /projects/{project_id}/branches/{branch_id}/roles/{role_name}/reset_password`
    pub async fn role_password_reset(
        &self,
        project_id: &str,
        branch_id: &str,
        role_name: &str,
    ) -> Result<RoleOperations> {
        let path = roles_path(project_id, branch_id)?
            .id("role_name", role_name)?
            .push("reset_password");
        self.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_body() {
        assert_eq!(
            serde_json::to_value(RoleCreateRequest::new("app user")).unwrap(),
            serde_json::json!({"role": {"name": "app user"}})
        );
    }

    #[test]
    fn test_password_is_not_debug_printed() {
        let password = RolePassword {
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", password).contains("hunter2"));
    }

    #[test]
    fn test_role_password_is_not_debug_printed() {
        let created: RoleOperations = serde_json::from_str(
            r#"{"role": {"name": "app", "password": "s3cr3t-generated"}, "operations": []}"#,
        )
        .unwrap();

        let printed = format!("{:?}", created);
        assert!(!printed.contains("s3cr3t-generated"));
        assert!(printed.contains("app"));
        assert_eq!(created.role.password.as_deref(), Some("s3cr3t-generated"));

        let without: Role = serde_json::from_str(r#"{"name": "app"}"#).unwrap();
        assert!(format!("{:?}", without).contains("password: None"));
    }
}
