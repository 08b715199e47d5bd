//
//  neon-api
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Neon API Client Library
//!
//! An async client for the [Neon](https://neon.tech) serverless Postgres
//! management API.
//!
//! ## Features
//!
//! - **Projects & Branches**: create, update, delete and list projects and
//!   their copy-on-write branches
//! - **Compute**: manage endpoints and start, suspend or restart them
//! - **Postgres objects**: databases and roles, including password reveal
//!   and reset
//! - **Account**: API keys, project sharing and consumption metrics
//! - **Operations**: inspect the asynchronous work every mutation schedules
//!
//! ## Module Structure
//!
//! - [`api`]: the client, resource models and errors
//! - [`auth`]: API key handling
//! - [`config`]: base URL and user agent
//! - [`util`]: small helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use neon_api::api::common::ListParams;
//! use neon_api::api::v2::ProjectListParams;
//! use neon_api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! // Reads NEON_API_KEY
//! let client = NeonClient::from_env()?;
//!
//! for project in client.projects(&ProjectListParams::default()).await?.projects {
//!     let branches = client.branches(&project.id, &ListParams::default()).await?;
//!     println!("{}: {} branches", project.id, branches.branches.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests are traced at `debug` level through the `tracing` crate. Install
//! any subscriber to see them; API keys are never logged.

/// API client, resource models and errors.
pub mod api;

/// API key handling.
///
/// Keys are taken from the caller or from the `NEON_API_KEY` environment
/// variable and sent as a bearer token.
pub mod auth;

/// Client configuration (base URL, user agent).
pub mod config;

/// Utility functions and helpers.
pub mod util;

pub use api::{ApiError, NeonClient, NeonClientBuilder, Result};

pub use auth::AuthCredential;

pub use config::ClientConfig;

/// HTTP method type accepted by [`NeonClient::request`].
pub use reqwest::Method;

/// Name sent in the default `User-Agent` header.
pub const APP_NAME: &str = "neon-api";

/// Library version, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use neon_api::VERSION;
///
/// println!("neon-api {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
