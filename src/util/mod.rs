//
//  neon-api
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the resource modules.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use neon_api::util::to_iso8601;
//!
//! let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//! assert_eq!(to_iso8601(&at), "2024-03-01T12:00:00Z");
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp the way Neon query parameters expect it:
/// RFC 3339, whole seconds, `Z` suffix.
pub fn to_iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Finds the first item whose id or name equals `key`.
///
/// List responses use this to look items up the way a user refers to them,
/// by either identifier.
pub(crate) fn find_by_key<'a, T, F>(items: &'a [T], key: &str, keys: F) -> Option<&'a T>
where
    F: Fn(&T) -> [Option<&str>; 2],
{
    items
        .iter()
        .find(|item| keys(item).iter().flatten().any(|candidate| *candidate == key))
}
