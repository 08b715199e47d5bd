//
//  neon-api
//  api/v2/consumption.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Per-project consumption metrics.
//!
//! Available on paid plans only. The response is paged by project; each
//! project carries its billing periods and, inside them, one metric record
//! per time bucket of the requested granularity.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::{Duration, Utc};
//! use neon_api::api::v2::{ConsumptionParams, Granularity};
//! use neon_api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! let client = NeonClient::from_env()?;
//! let to = Utc::now();
//! let params = ConsumptionParams::between(to - Duration::days(7), to)
//!     .granularity(Granularity::Daily);
//!
//! let usage = client.consumption(&params).await?;
//! for project in &usage.projects {
//!     println!("{}: {} periods", project.project_id, project.periods.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::common::{ApiPath, Pagination, QueryParams, Result};
use crate::api::NeonClient;
use crate::util::to_iso8601;

/// Size of the time buckets metrics are aggregated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Hourly,
    Daily,
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

/// Metrics for one time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionMetric {
    #[serde(default)]
    pub timeframe_start: Option<DateTime<Utc>>,

    #[serde(default)]
    pub timeframe_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub active_time_seconds: u64,

    #[serde(default)]
    pub compute_time_seconds: u64,

    #[serde(default)]
    pub written_data_bytes: u64,

    #[serde(default)]
    pub synthetic_storage_size_bytes: u64,

    #[serde(default)]
    pub data_storage_bytes_hour: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A billing period of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPeriod {
    #[serde(default)]
    pub period_id: Option<String>,

    #[serde(default)]
    pub period_plan: Option<String>,

    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,

    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub consumption: Vec<ConsumptionMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConsumption {
    pub project_id: String,

    #[serde(default)]
    pub periods: Vec<ConsumptionPeriod>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectConsumption {
    /// Compute seconds summed across every period and bucket in the response.
    pub fn total_compute_time_seconds(&self) -> u64 {
        self.periods
            .iter()
            .flat_map(|period| &period.consumption)
            .map(|metric| metric.compute_time_seconds)
            .sum()
    }
}

/// Response of `GET /consumption/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConsumptionResponse {
    pub projects: Vec<ProjectConsumption>,

    #[serde(default)]
    pub periods_in_response: Option<u64>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Query of the consumption endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumptionParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub granularity: Option<Granularity>,
    pub org_id: Option<String>,
}

impl ConsumptionParams {
    /// Metrics between `from` and `to`.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Default::default()
        }
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Continues after the page that returned `pagination`.
    pub fn after(mut self, pagination: &Pagination) -> Self {
        self.cursor = pagination.next_cursor().map(str::to_string);
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("cursor", self.cursor.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("from", self.from.as_ref().map(to_iso8601))
            .push_opt("to", self.to.as_ref().map(to_iso8601))
            .push_opt("granularity", self.granularity)
            .push_opt("org_id", self.org_id.as_deref())
    }
}

impl NeonClient {
    /// Lists per-project consumption.
    ///
    /// `GET /consumption/projects`
    pub async fn consumption(&self, params: &ConsumptionParams) -> Result<ProjectsConsumptionResponse> {
        let path = ApiPath::new("consumption").push("projects");
        self.get_with_query(&path, &params.to_query()).await
    }
}
