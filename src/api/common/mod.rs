//
//  neon-api
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for the Neon management API
//!
//! This module provides the types shared by every resource module: the
//! unified error type, the validated request path, query parameter
//! compaction and the pagination cursor returned by list endpoints.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ApiPath`] - Validated, percent-encoded request path
//! - [`QueryParams`] - Query string builder that drops absent values
//! - [`ErrorResponse`] - The error payload Neon returns on non-2xx responses
//! - Pagination types (re-exported from the `pagination` submodule)
//!
//! # Example
//!
//! ```rust
//! use neon_api::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::MissingCredential) => println!("Set NEON_API_KEY first"),
//!         Err(e) if e.is_not_found() => println!("Nothing there"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;
mod path;

pub use pagination::*;
pub use path::*;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Neon API operations.
///
/// # Variants
///
/// | Variant | Description | Raised |
/// |---------|-------------|--------|
/// | `MissingCredential` | No API key given and `NEON_API_KEY` unset | locally |
/// | `InvalidCredential` | API key failed format validation | locally |
/// | `MissingParameter` | A required path identifier was empty | locally |
/// | `InvalidParameter` | A path identifier was `.` or `..` | locally |
/// | `InvalidBaseUrl` | Configured base URL is unusable | locally |
/// | `Http` | Server answered with a non-2xx status | after the call |
/// | `Transport` | Connection, TLS or timeout failure | during the call |
/// | `Decode` | Response body was not the expected JSON | after the call |
///
/// None of these are retried by the client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No API key was passed explicitly and the environment had none either.
    #[error("API key required: pass one explicitly or set {}", crate::auth::API_KEY_ENV)]
    MissingCredential,

    /// The API key was present but malformed.
    ///
    /// # Parameters
    ///
    /// - `0` - Why the key was rejected
    #[error("Invalid API key: {0}")]
    InvalidCredential(String),

    /// A required path identifier was empty.
    ///
    /// # Parameters
    ///
    /// - `0` - Name of the missing parameter (e.g. `project_id`)
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A path identifier would not survive URL normalisation.
    ///
    /// `.` and `..` are collapsed by URL resolution, so the request would
    /// address a different resource.
    #[error("Invalid value for parameter {name}: {value:?}")]
    InvalidParameter {
        /// Name of the parameter (e.g. `branch_id`).
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The server answered with a non-success status code.
    ///
    /// `message` is taken from the Neon error payload when the body carries
    /// one, otherwise it is the raw body.
    #[error("API error ({status}): {message}")]
    Http {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Machine-readable error code from the payload, if any.
        code: Option<String>,
        /// Human-readable error message.
        message: String,
        /// The raw response body.
        body: String,
    },

    /// A transport-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected model.
    #[error("Failed to decode response: {source}")]
    Decode {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The raw body that failed to decode.
        body: String,
    },
}

impl ApiError {
    /// Builds an [`ApiError::Http`] from a failed response.
    ///
    /// Neon returns errors as `{"code": "...", "message": "..."}`. Bodies in
    /// that shape yield their message; anything else is passed through raw.
    pub fn from_response(status: StatusCode, body: String) -> Self {
        let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(payload) if !payload.message.is_empty() => (payload.code, payload.message),
            _ if body.trim().is_empty() => (
                None,
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            ),
            _ => (None, body.clone()),
        };

        Self::Http {
            status,
            code,
            message,
            body,
        }
    }

    /// Returns the HTTP status for [`ApiError::Http`] errors.
    ///
    /// Transport errors carrying a status (rare with reqwest) are reported as
    /// well; every other variant returns `None`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// `true` when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// `true` when the server answered 423, which Neon uses while a project
    /// still has operations running.
    pub fn is_locked(&self) -> bool {
        self.status() == Some(StatusCode::LOCKED)
    }

    /// The server-provided error body parsed as JSON, if it is JSON.
    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            Self::Http { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

/// Error payload returned by the Neon API on failed requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable error message.
    #[serde(default)]
    pub message: String,

    /// Request identifier for support tickets.
    #[serde(default)]
    pub request_id: Option<String>,
}
