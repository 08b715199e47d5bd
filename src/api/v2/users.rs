//
//  neon-api
//  api/v2/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The account that owns the API key.
//!
//! Useful as a cheap credential check: [`NeonClient::me`] fails with a 401
//! [`ApiError::Http`](crate::api::common::ApiError::Http) when the key is
//! revoked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{ApiPath, Result};
use crate::api::NeonClient;

/// The account behind the API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserInfo {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub projects_limit: Option<u64>,

    #[serde(default)]
    pub branches_limit: Option<u64>,

    #[serde(default)]
    pub max_autoscaling_limit: Option<f64>,

    #[serde(default)]
    pub plan: Option<String>,

    #[serde(default)]
    pub auth_accounts: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NeonClient {
    /// `GET /users/me`
    pub async fn me(&self) -> Result<CurrentUserInfo> {
        self.get(&ApiPath::new("users").push("me")).await
    }
}
