//
//  neon-api
//  api/common/path.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Request path and query string building.
//!
//! [`ApiPath`] holds the segments of a request path relative to the API base
//! URL. Identifier segments are checked when they are added, so a resource
//! method fails with [`ApiError::MissingParameter`] before anything is sent.
//! Segments are stored raw and percent-encoded by the dispatcher when the
//! final URL is assembled.
//!
//! [`QueryParams`] collects query pairs, silently dropping absent values.

use std::fmt;

use super::{ApiError, Result};

/// A validated request path relative to the API base URL.
///
/// # Example
///
/// ```rust
/// use neon_api::api::common::ApiPath;
///
/// let path = ApiPath::new("projects")
///     .id("project_id", "shiny-wind-028834")?
///     .push("branches");
///
/// assert_eq!(path.to_string(), "projects/shiny-wind-028834/branches");
/// # Ok::<(), neon_api::ApiError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Starts a path with a fixed segment.
    pub fn new(segment: &str) -> Self {
        Self {
            segments: vec![segment.to_string()],
        }
    }

    /// Appends a fixed segment.
    pub fn push(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Appends a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] with `name` when `value` is
    /// empty or only whitespace, and [`ApiError::InvalidParameter`] when it is
    /// `.` or `..`, which URL normalisation would drop from the path.
    pub fn id(mut self, name: &'static str, value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(ApiError::MissingParameter(name));
        }
        if value == "." || value == ".." {
            return Err(ApiError::InvalidParameter {
                name,
                value: value.to_string(),
            });
        }
        self.segments.push(value.to_string());
        Ok(self)
    }

    /// The raw, unencoded segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Query string pairs with absent values removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// `true` when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The collected key/value pairs in insertion order.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
