//
//  neon-api
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Key Resolution
//!
//! Neon API keys are opaque bearer tokens created in the Neon console under
//! *Account settings → API keys*. This module checks their format and decides
//! where a client's key comes from.
//!
//! ## Resolution Order
//!
//! 1. A key passed explicitly to the constructor
//! 2. The [`API_KEY_ENV`] environment variable
//!
//! If neither yields a key, resolution fails with
//! [`ApiError::MissingCredential`]. An empty environment variable counts as
//! unset.
//!
//! ## Example
//!
//! ```rust
//! use neon_api::auth::validate_token;
//!
//! assert!(validate_token("napi_abc123"));
//! assert!(!validate_token("has space"));
//! ```

use crate::api::common::{ApiError, Result};

/// Environment variable read by the "from environment" constructors.
pub const API_KEY_ENV: &str = "NEON_API_KEY";

/// Validates the format of an API key.
///
/// A key must not be empty and must not contain whitespace. This is a
/// format check only; the server decides whether the key is actually valid.
///
/// # Example
///
/// ```rust
/// use neon_api::auth::validate_token;
///
/// assert!(validate_token("abc123"));
///
/// assert!(!validate_token(""));             // Empty token
/// assert!(!validate_token("has\ttab"));     // Contains tab
/// assert!(!validate_token("has\nnewline")); // Contains newline
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Picks the API key from an explicit value or, failing that, from `lookup`.
///
/// `lookup` receives [`API_KEY_ENV`] and returns its value, which keeps the
/// resolution logic independent of the real process environment.
pub(crate) fn resolve_token<F>(explicit: Option<&str>, lookup: F) -> Result<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let token = match explicit {
        Some(token) => token.trim().to_string(),
        None => lookup(API_KEY_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::MissingCredential)?,
    };

    if token.is_empty() {
        return Err(ApiError::InvalidCredential("API key is empty".to_string()));
    }

    if !validate_token(&token) {
        return Err(ApiError::InvalidCredential(
            "API key must not contain whitespace".to_string(),
        ));
    }

    Ok(token)
}

/// Reads [`API_KEY_ENV`] from the process environment.
pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
