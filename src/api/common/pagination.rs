//
//  neon-api
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination Types for Neon API Responses
//!
//! Neon list endpoints use cursor-based pagination: a response may carry a
//! `pagination` object whose cursor is passed back as the `cursor` query
//! parameter to fetch the next page. Older endpoints name it `cursor`, newer
//! ones `next` (next to `sort_by`/`sort_order`). The client never follows
//! cursors on its own; callers decide whether to request another page.
//!
//! # Example
//!
//! ```rust
//! use neon_api::api::common::{ListParams, Pagination};
//!
//! let page: Pagination = serde_json::from_str(r#"{"cursor": "br-aged-salad-637688"}"#)?;
//! let next = ListParams::default().limit(10).after(&page);
//!
//! assert_eq!(next.cursor.as_deref(), Some("br-aged-salad-637688"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::QueryParams;

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Opaque cursor to pass back as the `cursor` query parameter.
    #[serde(default)]
    pub cursor: Option<String>,

    /// `next`, `sort_by`, `sort_order` and anything else the endpoint sends.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pagination {
    /// The cursor of the following page: `cursor` if present, else `next`.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor
            .as_deref()
            .or_else(|| self.extra.get("next").and_then(Value::as_str))
            .filter(|cursor| !cursor.is_empty())
    }
}

/// Cursor and page size accepted by list endpoints.
///
/// Both fields are optional; unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Cursor from a previous response's [`Pagination`].
    pub cursor: Option<String>,

    /// Maximum number of items to return.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the cursor explicitly.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Continues after the page described by `pagination`. The cursor is
    /// cleared when the page carried none.
    pub fn after(mut self, pagination: &Pagination) -> Self {
        self.cursor = pagination.next_cursor().map(str::to_string);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("cursor", self.cursor.as_deref())
            .push_opt("limit", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_empty_by_default() {
        assert!(ListParams::default().to_query().is_empty());
    }

    #[test]
    fn test_list_params_to_query() {
        let params = ListParams::default().cursor("abc").limit(5);
        assert_eq!(
            params.to_query().as_pairs(),
            &[
                ("cursor".to_string(), "abc".to_string()),
                ("limit".to_string(), "5".to_string())
            ]
        );
    }

    #[test]
    fn test_pagination_deserialize() {
        let page: Pagination = serde_json::from_str(r#"{"cursor": "next-1"}"#).unwrap();
        assert_eq!(page.cursor.as_deref(), Some("next-1"));
        assert_eq!(page.next_cursor(), Some("next-1"));
    }

    #[test]
    fn test_pagination_without_cursor() {
        let page: Pagination = serde_json::from_str(
            r#"{"next": "abc", "sort_by": "updated_at", "sort_order": "desc"}"#,
        )
        .unwrap();

        assert!(page.cursor.is_none());
        assert_eq!(page.next_cursor(), Some("abc"));
        assert_eq!(page.extra["sort_by"], "updated_at");

        let params = ListParams::default().limit(5).after(&page);
        assert_eq!(params.cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_after_empty_pagination_clears_cursor() {
        let params = ListParams::default()
            .cursor("old")
            .after(&Pagination::default());
        assert!(params.cursor.is_none());
    }
}
