//
//  neon-api
//  api/v2/api_keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Personal API keys of the authenticated account.
//!
//! The secret of a key is only ever returned once, by
//! [`NeonClient::api_key_create`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{ApiPath, Result};
use crate::api::NeonClient;

/// An API key as listed by `GET /api_keys`. Carries no secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_used_from_addr: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body of `POST /api_keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCreateRequest {
    pub key_name: String,
}

impl ApiKeyCreateRequest {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
        }
    }
}

/// A freshly created key, including its secret.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyCreateResponse {
    pub id: i64,

    pub key: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Debug for ApiKeyCreateResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCreateResponse")
            .field("id", &self.id)
            .field("key", &"***")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyRevokeResponse {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub revoked: bool,

    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_used_from_addr: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NeonClient {
    /// `GET /api_keys`
    pub async fn api_keys(&self) -> Result<Vec<ApiKey>> {
        self.get(&ApiPath::new("api_keys")).await
    }

    /// `POST /api_keys`
    pub async fn api_key_create(&self, request: &ApiKeyCreateRequest) -> Result<ApiKeyCreateResponse> {
        self.post(&ApiPath::new("api_keys"), request).await
    }

    /// `DELETE /api_keys/{key_id}`
    pub async fn api_key_revoke(&self, key_id: i64) -> Result<ApiKeyRevokeResponse> {
        let path = ApiPath::new("api_keys").push(&key_id.to_string());
        self.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_key_secret_is_not_debug_printed() {
        let created: ApiKeyCreateResponse =
            serde_json::from_str(r#"{"id": 7, "key": "napi_secret"}"#).unwrap();
        assert_eq!(created.key, "napi_secret");
        assert!(!format!("{:?}", created).contains("napi_secret"));
    }

    #[test]
    fn test_key_list_decodes() {
        let keys: Vec<ApiKey> = serde_json::from_str(
            r#"[{"id": 1, "name": "ci", "created_at": "2024-01-01T00:00:00Z", "last_used_at": null}]"#,
        )
        .unwrap();
        assert_eq!(keys[0].name, "ci");
        assert!(keys[0].last_used_at.is_none());
    }
}
