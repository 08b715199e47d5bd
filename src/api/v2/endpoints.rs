//
//  neon-api
//  api/v2/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Compute endpoints.
//!
//! An endpoint is the Postgres compute attached to a branch. Clients connect
//! to its `host`. Endpoints scale to zero when idle and can be started,
//! suspended and restarted explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Operation;
use crate::api::common::{ApiError, ApiPath, Pagination, Result};
use crate::api::NeonClient;
use crate::util::find_by_key;

/// Whether an endpoint accepts writes.
///
/// A missing type decodes as `Unknown`. Types this client does not model are
/// kept verbatim in `Other` and serialize back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    ReadWrite,
    ReadOnly,
    #[default]
    Unknown,
    #[serde(untagged)]
    Other(String),
}

/// Compute state of an endpoint. Unmodelled states land in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointState {
    Init,
    Active,
    Idle,
    #[default]
    Unknown,
    #[serde(untagged)]
    Other(String),
}

/// A compute endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Endpoint identifier, e.g. `ep-cool-darkness-123456`.
    pub id: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub branch_id: Option<String>,

    /// Hostname clients connect to.
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub region_id: Option<String>,

    #[serde(rename = "type", default)]
    pub endpoint_type: EndpointType,

    #[serde(default)]
    pub current_state: EndpointState,

    #[serde(default)]
    pub pending_state: Option<EndpointState>,

    #[serde(default)]
    pub autoscaling_limit_min_cu: Option<f64>,

    #[serde(default)]
    pub autoscaling_limit_max_cu: Option<f64>,

    #[serde(default)]
    pub pooler_enabled: Option<bool>,

    #[serde(default)]
    pub pooler_mode: Option<String>,

    #[serde(default)]
    pub disabled: Option<bool>,

    #[serde(default)]
    pub passwordless_access: Option<bool>,

    /// Seconds of inactivity before suspend. `0` means the default, `-1`
    /// disables suspension.
    #[serde(default)]
    pub suspend_timeout_seconds: Option<i64>,

    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,

    #[serde(default)]
    pub proxy_host: Option<String>,

    #[serde(default)]
    pub provisioner: Option<String>,

    #[serde(default)]
    pub settings: Option<Value>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointsResponse {
    pub endpoints: Vec<Endpoint>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl EndpointsResponse {
    /// Finds an endpoint by id or host.
    pub fn find(&self, key: &str) -> Option<&Endpoint> {
        find_by_key(&self.endpoints, key, |ep| [Some(ep.id.as_str()), ep.host.as_deref()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointResponse {
    pub endpoint: Endpoint,
}

/// Response of the mutating endpoint calls, including start/suspend/restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointOperations {
    pub endpoint: Endpoint,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointCreateSettings {
    pub branch_id: String,

    #[serde(rename = "type")]
    pub endpoint_type: EndpointType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_min_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_max_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pooler_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_timeout_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Request body of `POST /projects/{project_id}/endpoints`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointCreateRequest {
    pub endpoint: EndpointCreateSettings,
}

impl EndpointCreateRequest {
    /// An endpoint of `endpoint_type` on `branch_id`.
    pub fn new(branch_id: impl Into<String>, endpoint_type: EndpointType) -> Self {
        Self {
            endpoint: EndpointCreateSettings {
                branch_id: branch_id.into(),
                endpoint_type,
                region_id: None,
                autoscaling_limit_min_cu: None,
                autoscaling_limit_max_cu: None,
                pooler_enabled: None,
                suspend_timeout_seconds: None,
                disabled: None,
            },
        }
    }

    pub fn autoscaling(mut self, min_cu: f64, max_cu: f64) -> Self {
        self.endpoint.autoscaling_limit_min_cu = Some(min_cu);
        self.endpoint.autoscaling_limit_max_cu = Some(max_cu);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.branch_id.trim().is_empty() {
            return Err(ApiError::MissingParameter("branch_id"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointUpdateSettings {
    /// Moves the endpoint to another branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_min_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_limit_max_cu: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pooler_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_timeout_seconds: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Request body of `PATCH /projects/{project_id}/endpoints/{endpoint_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointUpdateRequest {
    pub endpoint: EndpointUpdateSettings,
}

fn endpoint_path(project_id: &str, endpoint_id: &str) -> Result<ApiPath> {
    ApiPath::new("projects")
        .id("project_id", project_id)?
        .push("endpoints")
        .id("endpoint_id", endpoint_id)
}

impl NeonClient {
    /// `GET /projects/{project_id}/endpoints`
    pub async fn endpoints(&self, project_id: &str) -> Result<EndpointsResponse> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("endpoints");

        self.get(&path).await
    }

    /// `GET /projects/{project_id}/endpoints/{endpoint_id}`
    pub async fn endpoint(&self, project_id: &str, endpoint_id: &str) -> Result<EndpointResponse> {
        self.get(&endpoint_path(project_id, endpoint_id)?).await
    }

    /// Creates an endpoint. An empty `branch_id` fails before any request.
    ///
    /// `POST /projects/{project_id}/endpoints`
    pub async fn endpoint_create(
        &self,
        project_id: &str,
        request: &EndpointCreateRequest,
    ) -> Result<EndpointOperations> {
        let path = ApiPath::new("projects")
            .id("project_id", project_id)?
            .push("endpoints");
        request.validate()?;

        self.post(&path, request).await
    }

    /// `PATCH /projects/{project_id}/endpoints/{endpoint_id}`
    pub async fn endpoint_update(
        &self,
        project_id: &str,
        endpoint_id: &str,
        request: &EndpointUpdateRequest,
    ) -> Result<EndpointOperations> {
        self.patch(&endpoint_path(project_id, endpoint_id)?, request).await
    }

    /// `DELETE /projects/{project_id}/endpoints/{endpoint_id}`
    pub async fn endpoint_delete(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<EndpointOperations> {
        self.delete(&endpoint_path(project_id, endpoint_id)?).await
    }

    /// `POST /projects/{project_id}/endpoints/{endpoint_id}/start`
    pub async fn endpoint_start(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<EndpointOperations> {
        let path = endpoint_path(project_id, endpoint_id)?.push("start");
        self.post_empty(&path).await
    }

    /// `POST /projects/{project_id}/endpoints/{endpoint_id}/suspend`
    pub async fn endpoint_suspend(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<EndpointOperations> {
        let path = endpoint_path(project_id, endpoint_id)?.push("suspend");
        self.post_empty(&path).await
    }

    /// `POST /projects/{project_id}/endpoints/{endpoint_id}/restart`
    pub async fn endpoint_restart(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<EndpointOperations> {
        let path = endpoint_path(project_id, endpoint_id)?.push("restart");
        self.post_empty(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_decodes_type_and_state() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{
                "id": "ep-1",
                "host": "ep-1.us-east-2.aws.neon.tech",
                "type": "read_only",
                "current_state": "idle",
                "autoscaling_limit_min_cu": 0.25,
                "compute_release_version": "6310"
            }"#,
        )
        .unwrap();

        assert_eq!(endpoint.endpoint_type, EndpointType::ReadOnly);
        assert_eq!(endpoint.current_state, EndpointState::Idle);
        assert_eq!(endpoint.autoscaling_limit_min_cu, Some(0.25));
        assert!(endpoint.extra.contains_key("compute_release_version"));
    }

    #[test]
    fn test_unknown_state_is_tolerated() {
        let endpoint: Endpoint =
            serde_json::from_str(r#"{"id": "ep-1", "current_state": "hibernating"}"#).unwrap();
        assert_eq!(endpoint.current_state, EndpointState::Other("hibernating".to_string()));
        assert_eq!(endpoint.endpoint_type, EndpointType::Unknown);
    }

    #[test]
    fn test_unmodelled_values_serialize_back_unchanged() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{"id": "ep-1", "type": "read_replica", "current_state": "hibernating"}"#,
        )
        .unwrap();

        let value = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(value["type"], "read_replica");
        assert_eq!(value["current_state"], "hibernating");
        assert_eq!(
            serde_json::to_value(EndpointState::Active).unwrap(),
            serde_json::json!("active")
        );
    }

    #[test]
    fn test_create_request_body() {
        let request = EndpointCreateRequest::new("br-1", EndpointType::ReadWrite).autoscaling(0.25, 2.0);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "endpoint": {
                    "branch_id": "br-1",
                    "type": "read_write",
                    "autoscaling_limit_min_cu": 0.25,
                    "autoscaling_limit_max_cu": 2.0
                }
            })
        );
    }

    #[test]
    fn test_create_request_requires_branch() {
        let request = EndpointCreateRequest::new("  ", EndpointType::ReadWrite);
        assert!(matches!(
            request.validate(),
            Err(ApiError::MissingParameter("branch_id"))
        ));
    }

    #[test]
    fn test_find_by_host() {
        let response: EndpointsResponse = serde_json::from_str(
            r#"{"endpoints": [{"id": "ep-1", "host": "ep-1.example.com"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.find("ep-1.example.com").map(|ep| ep.id.as_str()),
            Some("ep-1")
        );
    }
}
