//
//  neon-api
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client-side settings that are not credentials: where requests go and how
//! the client identifies itself.
//!
//! ## Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | Base URL | `https://console.neon.tech/api/v2/` |
//! | User-Agent | `neon-api/<crate version>` |
//!
//! The base URL is normalised to end with `/` so request paths are always
//! appended below it rather than replacing its last segment.
//!
//! ## Usage
//!
//! ```rust
//! use neon_api::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_base_url("http://localhost:8080/api/v2")?
//!     .with_user_agent("my-tool/1.0");
//!
//! assert_eq!(config.base_url(), "http://localhost:8080/api/v2/");
//! assert_eq!(config.user_agent(), "my-tool/1.0");
//! # Ok::<(), neon_api::ApiError>(())
//! ```

use url::Url;

use crate::api::common::{ApiError, Result};

/// The production Neon management API.
pub const DEFAULT_BASE_URL: &str = "https://console.neon.tech/api/v2/";

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("{}/{}", crate::APP_NAME, crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Points the client at a different API root.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` does not parse or
    /// cannot carry a path (e.g. `mailto:` URLs).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?.to_string();
        Ok(self)
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The API root every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Parses `raw` and makes sure its path ends with `/`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{raw} cannot be used as a base URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent().starts_with("neon-api/"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:1234")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:1234/");

        let config = ClientConfig::default()
            .with_base_url("https://example.com/api/v2")
            .unwrap();
        assert_eq!(config.base_url(), "https://example.com/api/v2/");
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            ClientConfig::default().with_base_url("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::default().with_base_url("mailto:ops@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
