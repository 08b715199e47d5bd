//
//  neon-api
//  api/v2/databases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Postgres databases living on a branch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Operation;
use crate::api::common::{ApiError, ApiPath, ListParams, Pagination, Result};
use crate::api::NeonClient;

/// A database on a branch. Databases are addressed by name, not by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub branch_id: Option<String>,

    pub name: String,

    /// Role that owns the database.
    #[serde(default)]
    pub owner_name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabasesResponse {
    pub databases: Vec<Database>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl DatabasesResponse {
    pub fn find(&self, name: &str) -> Option<&Database> {
        self.databases.iter().find(|db| db.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseResponse {
    pub database: Database,
}

/// Response of the mutating database endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseOperations {
    pub database: Database,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCreateSettings {
    pub name: String,
    pub owner_name: String,
}

/// Request body of `POST .../databases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCreateRequest {
    pub database: DatabaseCreateSettings,
}

impl DatabaseCreateRequest {
    pub fn new(name: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            database: DatabaseCreateSettings {
                name: name.into(),
                owner_name: owner_name.into(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.database.name.trim().is_empty() {
            return Err(ApiError::MissingParameter("database_name"));
        }
        if self.database.owner_name.trim().is_empty() {
            return Err(ApiError::MissingParameter("owner_name"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseUpdateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// Request body of `PATCH .../databases/{database_name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseUpdateRequest {
    pub database: DatabaseUpdateSettings,
}

impl DatabaseUpdateRequest {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            database: DatabaseUpdateSettings {
                name: Some(name.into()),
                owner_name: None,
            },
        }
    }

    pub fn owner(owner_name: impl Into<String>) -> Self {
        Self {
            database: DatabaseUpdateSettings {
                name: None,
                owner_name: Some(owner_name.into()),
            },
        }
    }
}

fn databases_path(project_id: &str, branch_id: &str) -> Result<ApiPath> {
    Ok(ApiPath::new("projects")
        .id("project_id", project_id)?
        .push("branches")
        .id("branch_id", branch_id)?
        .push("databases"))
}

impl NeonClient {
    /// `GET /projects/{project_id}/branches/{branch_id}/databases`
    pub async fn databases(
        &self,
        project_id: &str,
        branch_id: &str,
        params: &ListParams,
    ) -> Result<DatabasesResponse> {
        let path = databases_path(project_id, branch_id)?;
        self.get_with_query(&path, &params.to_query()).await
    }

    /// `GET /projects/{project_id}/branches/{branch_id}/databases/{database_name}`
    pub async fn database(
        &self,
        project_id: &str,
        branch_id: &str,
        database_name: &str,
    ) -> Result<DatabaseResponse> {
        let path = databases_path(project_id, branch_id)?.id("database_name", database_name)?;
        self.get(&path).await
    }

    /// `POST /projects/{project_id}/branches/{branch_id}/databases`
    pub async fn database_create(
        &self,
        project_id: &str,
        branch_id: &str,
        request: &DatabaseCreateRequest,
    ) -> Result<DatabaseOperations> {
        let path = databases_path(project_id, branch_id)?;
        request.validate()?;

        self.post(&path, request).await
    }

    /// `PATCH /projects/{project_id}/branches/{branch_id}/databases/{database_name}`
    pub async fn database_update(
        &self,
        project_id: &str,
        branch_id: &str,
        database_name: &str,
        request: &DatabaseUpdateRequest,
    ) -> Result<DatabaseOperations> {
        let path = databases_path(project_id, branch_id)?.id("database_name", database_name)?;
        self.patch(&path, request).await
    }

    /// `DELETE /projects/{project_id}/branches/{branch_id}/databases/{database_name}`
    pub async fn database_delete(
        &self,
        project_id: &str,
        branch_id: &str,
        database_name: &str,
    ) -> Result<DatabaseOperations> {
        let path = databases_path(project_id, branch_id)?.id("database_name", database_name)?;
        self.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_only_sends_set_fields() {
        assert_eq!(
            serde_json::to_value(DatabaseUpdateRequest::owner("alice")).unwrap(),
            serde_json::json!({"database": {"owner_name": "alice"}})
        );
    }

    #[test]
    fn test_create_request_requires_name_and_owner() {
        assert!(matches!(
            DatabaseCreateRequest::new(" ", "owner").validate(),
            Err(ApiError::MissingParameter("database_name"))
        ));
        assert!(matches!(
            DatabaseCreateRequest::new("app", "").validate(),
            Err(ApiError::MissingParameter("owner_name"))
        ));
        assert!(DatabaseCreateRequest::new("app", "owner").validate().is_ok());
    }

    #[test]
    fn test_find_by_name() {
        let response: DatabasesResponse = serde_json::from_str(
            r#"{"databases": [{"id": 1, "name": "neondb", "owner_name": "neondb_owner"}]}"#,
        )
        .unwrap();

        assert_eq!(response.find("neondb").and_then(|db| db.id), Some(1));
        assert!(response.find("other").is_none());
    }
}
