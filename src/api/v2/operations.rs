//
//  neon-api
//  api/v2/operations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project operations.
//!
//! Almost every mutating call on a project (creating a branch, starting an
//! endpoint, resetting a password, ...) is carried out asynchronously by the
//! Neon control plane as one or more *operations*. Mutating endpoints return
//! the operations they scheduled; this module lets callers inspect them.
//!
//! # Example
//!
//! ```rust,no_run
//! use neon_api::api::common::ListParams;
//! use neon_api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! let client = NeonClient::from_env()?;
//! let page = client
//!     .operations("shiny-wind-028834", &ListParams::default().limit(20))
//!     .await?;
//!
//! for operation in page.operations.iter().filter(|op| !op.status.is_terminal()) {
//!     println!("{} {} is still {:?}", operation.id, operation.action, operation.status);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{ApiPath, ListParams, Pagination, Result};
use crate::api::NeonClient;

/// Lifecycle state of an operation.
///
/// A missing status decodes as [`OperationStatus::Unknown`]. Statuses the
/// client does not know yet are kept in [`OperationStatus::Other`] and
/// serialize back as the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Scheduling,
    Running,
    Finished,
    Failed,
    Error,
    Cancelling,
    Cancelled,
    Skipped,
    #[default]
    Unknown,
    #[serde(untagged)]
    Other(String),
}

impl OperationStatus {
    /// `true` once the operation will not change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished | Self::Failed | Self::Error | Self::Cancelled | Self::Skipped
        )
    }
}

/// A single control-plane operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation identifier (a UUID).
    pub id: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub branch_id: Option<String>,

    #[serde(default)]
    pub endpoint_id: Option<String>,

    /// What the operation does, e.g. `create_branch` or `start_compute`.
    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub status: OperationStatus,

    /// Error message for failed operations.
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub failures_count: u32,

    #[serde(default)]
    pub total_duration_ms: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the operation list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsResponse {
    pub operations: Vec<Operation>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Response of the single-operation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub operation: Operation,
}

impl NeonClient {
    /// Lists the operations of a project, newest first.
    ///
    /// `GET /projects/{project_id}/operations`
    pub async fn operations(
        &self,
        project_id: &str,
        params: &ListParams,
    ) -> Result<OperationsResponse> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("operations");

        self.get_with_query(&path, &params.to_query()).await
    }

    /// Gets one operation.
    ///
    /// `GET /projects/{project_id}/operations/{operation_id}`
    pub async fn operation(&self, project_id: &str, operation_id: &str) -> Result<OperationResponse> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("operations")
            .id("operation_id", operation_id)?;

        self.get(&path).await
    }
}
