//
//  neon-api
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Neon API
//!
//! This module provides [`NeonClient`], the single chokepoint through which
//! every API call is made. Resource methods in [`crate::api::v2`] only build
//! a path and a payload and hand them to [`NeonClient::request`].
//!
//! ## Features
//!
//! - Bearer authentication header injection
//! - Fixed, configurable base URL with percent-encoded path segments
//! - JSON serialization/deserialization
//! - Distinct errors for HTTP status, transport and decode failures
//! - Custom User-Agent header
//!
//! Each call performs exactly one HTTP request. There are no retries, no
//! caching and no timeouts beyond reqwest's defaults.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{ApiError, ApiPath, QueryParams, Result};
use crate::auth::AuthCredential;
use crate::config::{parse_base_url, ClientConfig};

/// The client for the Neon management API.
///
/// `NeonClient` is cheap to clone and safe to share between tasks: it only
/// holds an immutable credential, an immutable configuration and reqwest's
/// reference-counted connection pool.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use neon_api::NeonClient;
///
/// // Explicit key
/// let client = NeonClient::new("napi_xxx")?;
///
/// // Key from NEON_API_KEY
/// let client = NeonClient::from_env()?;
///
/// // Custom base URL or user agent
/// let client = NeonClient::builder()
///     .api_key("napi_xxx")
///     .base_url("https://console.neon.tech/api/v2/")
///     .user_agent("my-tool/1.0")
///     .build()?;
/// # Ok::<(), neon_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NeonClient {
    /// The underlying HTTP client
    http: Client,
    /// API key sent as a bearer token
    credential: AuthCredential,
    /// Base URL and user agent
    config: ClientConfig,
    /// Parsed form of `config.base_url()`
    base_url: Url,
}

impl NeonClient {
    /// Creates a client with an explicit API key and the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredential`] if the key is malformed.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        Self::with_config(AuthCredential::bearer(api_key)?, ClientConfig::default())
    }

    /// Creates a client whose API key is read from `NEON_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredential`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::with_config(AuthCredential::from_env()?, ClientConfig::default())
    }

    /// Creates a client from an existing credential and configuration.
    pub fn with_config(credential: AuthCredential, config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(config.base_url())?;
        let http = Client::builder().user_agent(config.user_agent()).build()?;

        Ok(Self {
            http,
            credential,
            config,
            base_url,
        })
    }

    /// Starts a [`NeonClientBuilder`].
    pub fn builder() -> NeonClientBuilder {
        NeonClientBuilder::default()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The API root every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the full request URL for `path` and `query`.
    fn url_for(&self, path: &ApiPath, query: &QueryParams) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.segments());

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.as_pairs());
        }

        Ok(url)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// This is the dispatcher every resource method goes through. The
    /// `Authorization: Bearer` and `Accept: application/json` headers are
    /// always attached; `body`, when present, is sent as JSON.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] for any non-2xx status, carrying the status code
    ///   and the server's error payload
    /// - [`ApiError::Transport`] if the request could not be sent or the body
    ///   could not be read
    /// - [`ApiError::Decode`] if the body is not JSON of the shape `T`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use neon_api::api::common::{ApiPath, QueryParams};
    /// use neon_api::NeonClient;
    /// use neon_api::Method;
    ///
    /// # async fn example() -> neon_api::Result<()> {
    /// let client = NeonClient::from_env()?;
    /// let path = ApiPath::new("projects");
    /// let query = QueryParams::new().push("limit", 5);
    ///
    /// let raw: serde_json::Value = client
    ///     .request(Method::GET, &path, &query, None::<&()>)
    ///     .await?;
    /// println!("{raw:#}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &ApiPath,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path, query)?;
        tracing::debug!(%method, %path, "sending request");

        let mut request = self
            .credential
            .apply_to_request(self.http.request(method.clone(), url))
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%method, %path, %status, "request failed");
            return Err(ApiError::from_response(status, text));
        }

        tracing::debug!(%method, %path, %status, "request succeeded");
        decode(text)
    }

    /// Makes an HTTP GET request to `path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &ApiPath) -> Result<T> {
        self.request(Method::GET, path, &QueryParams::new(), None::<&()>)
            .await
    }

    /// Makes an HTTP GET request to `path` with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &ApiPath,
        query: &QueryParams,
    ) -> Result<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes an HTTP POST request to `path` with a JSON body.
    pub async fn post<T, B>(&self, path: &ApiPath, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &QueryParams::new(), Some(body))
            .await
    }

    /// Makes an HTTP POST request to `path` without a body.
    ///
    /// Used for action endpoints such as `.../start` or `.../reset_password`.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &ApiPath) -> Result<T> {
        self.request(Method::POST, path, &QueryParams::new(), None::<&()>)
            .await
    }

    /// Makes an HTTP PATCH request to `path` with a JSON body.
    pub async fn patch<T, B>(&self, path: &ApiPath, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, &QueryParams::new(), Some(body))
            .await
    }

    /// Makes an HTTP DELETE request to `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &ApiPath) -> Result<T> {
        self.request(Method::DELETE, path, &QueryParams::new(), None::<&()>)
            .await
    }
}

/// Decodes a successful response body. An empty body decodes as `null`.
fn decode<T: DeserializeOwned>(body: String) -> Result<T> {
    let text = if body.trim().is_empty() {
        "null"
    } else {
        body.as_str()
    };
    let parsed = serde_json::from_str(text);

    parsed.map_err(|source| ApiError::Decode { source, body })
}

/// Builder for [`NeonClient`].
///
/// Errors from an invalid base URL or a missing/invalid key are reported by
/// [`build`](Self::build). Without an explicit key, `build` falls back to
/// `NEON_API_KEY`.
#[derive(Debug, Clone, Default)]
pub struct NeonClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl NeonClientBuilder {
    /// Sets the API key explicitly.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolves the credential and builds the client.
    pub fn build(self) -> Result<NeonClient> {
        let credential = AuthCredential::resolve(self.api_key.as_deref())?;

        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        NeonClient::with_config(credential, config)
    }
}
