//
//  neon-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP access to the Neon management API (`https://console.neon.tech/api/v2`).
//!
//! ## Architecture
//!
//! - [`client`]: the request dispatcher, authentication header injection and
//!   response decoding
//! - [`v2`]: resource models and the methods that address them
//! - [`common`]: shared types (errors, paths, pagination)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neon_api::api::NeonClient;
//!
//! # async fn example() -> neon_api::Result<()> {
//! let client = NeonClient::new("napi_...")?;
//! let me = client.me().await?;
//! println!("signed in as {:?}", me.email);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every method returns [`ApiError`]. Non-2xx responses carry the status and
//! the server's message; see [`ApiError::is_not_found`] and friends for the
//! common checks.

/// Core HTTP client.
pub mod client;

/// Shared types: [`ApiError`], [`ApiPath`](common::ApiPath),
/// [`ListParams`](common::ListParams), [`Pagination`](common::Pagination).
pub mod common;

/// Neon API v2 resources.
pub mod v2;

pub use client::{NeonClient, NeonClientBuilder};

pub use common::{ApiError, Result};
