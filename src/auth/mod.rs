//
//  neon-api
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The Neon management API authenticates every request with an API key sent
//! as a bearer token. This module holds that key and applies it to outgoing
//! requests.
//!
//! ## Module Structure
//!
//! - `token`: API key validation and explicit/environment resolution
//!
//! ## Example
//!
//! ```rust
//! use neon_api::auth::AuthCredential;
//!
//! let credential = AuthCredential::bearer("napi_example_key")?;
//! assert_eq!(format!("{credential:?}"), "AuthCredential { token: \"napi…\" }");
//! # Ok::<(), neon_api::ApiError>(())
//! ```

mod token;

pub use token::{validate_token, API_KEY_ENV};

pub(crate) use token::{env_lookup, resolve_token};

use std::fmt;

use reqwest::RequestBuilder;

use crate::api::common::Result;

/// A Neon API key used as a bearer token.
///
/// The key is immutable once constructed. Its `Debug` output only shows the
/// first four characters so credentials do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCredential {
    token: String,
}

impl AuthCredential {
    /// Wraps an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredential`](crate::ApiError::InvalidCredential)
    /// if the key is empty or contains whitespace.
    pub fn bearer(token: impl AsRef<str>) -> Result<Self> {
        Self::resolve(Some(token.as_ref()))
    }

    /// Reads the API key from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredential`](crate::ApiError::MissingCredential)
    /// if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// Uses `explicit` when given, otherwise falls back to [`API_KEY_ENV`].
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        let token = resolve_token(explicit, env_lookup)?;
        Ok(Self { token })
    }

    /// The raw API key.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Adds the `Authorization: Bearer <key>` header to `request`.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.token.chars().take(4).collect();
        f.debug_struct("AuthCredential")
            .field("token", &format!("{visible}…"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    #[test]
    fn test_bearer_trims_and_keeps_token() {
        let credential = AuthCredential::bearer(" napi_key ").unwrap();
        assert_eq!(credential.token(), "napi_key");
    }

    #[test]
    fn test_bearer_rejects_whitespace() {
        let err = AuthCredential::bearer("napi key").unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredential(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = AuthCredential::bearer("napi_secret_value").unwrap();
        let rendered = format!("{credential:?}");

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("napi"));
    }
}
