// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capture timestamp extraction and display formatting.
//!
//! Capture timestamps are fixed-width `YYYYMMDDhhmmss` strings in UTC. Shorter
//! strings are partial timestamps and travel through untouched. An empty
//! string always means "unknown".

use std::sync::OnceLock;

use regex::Regex;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::temporal_url::NESTED_REWRITE_MARKER;

/// Name of the cookie carrying the capture timestamp of live pages.
pub const TIMESTAMP_COOKIE: &str = "pywb.timestamp";

/// Length of a full `YYYYMMDDhhmmss` capture timestamp.
pub const TIMESTAMP_LEN: usize = 14;

const COMPACT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]");

const GMT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

const LOCAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Timestamp path segment directly before the nested-rewrite marker.
///
/// Returns `""` when the marker is absent or no `/` precedes it (a `/` at
/// index 0 does not count).
///
/// ```
/// use replay_frame_core::extract_timestamp_from_url;
///
/// let ts = extract_timestamp_from_url("http://x/20200101000000mp_/http://orig");
/// assert_eq!(ts, "20200101000000");
/// assert_eq!(extract_timestamp_from_url("http://x/nomarkerhere"), "");
/// ```
pub fn extract_timestamp_from_url(url: &str) -> String {
    let Some(marker) = url.find(NESTED_REWRITE_MARKER) else {
        return String::new();
    };
    let head = &url[..marker];
    match head.rfind('/') {
        Some(slash) if slash > 0 => head[slash + 1..].to_owned(),
        _ => String::new(),
    }
}

fn cookie_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"{}=(\d{{1,{TIMESTAMP_LEN}}})",
            regex::escape(TIMESTAMP_COOKIE)
        ))
        .ok()
    })
    .as_ref()
}

/// First 1-14 digit timestamp following `pywb.timestamp=` in a cookie string.
///
/// Returns `""` when the cookie is absent.
pub fn extract_timestamp_from_cookie(cookie_header: &str) -> String {
    cookie_regex()
        .and_then(|re| re.captures(cookie_header))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

fn parse_utc(ts: &str) -> Option<OffsetDateTime> {
    if ts.chars().count() < TIMESTAMP_LEN {
        return None;
    }
    let head = ts.get(..TIMESTAMP_LEN)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    PrimitiveDateTime::parse(head, COMPACT)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Render a capture timestamp for display.
///
/// Inputs shorter than 14 characters, or whose first 14 characters are not a
/// valid UTC date/time, are returned unchanged. `as_utc` selects the GMT form
/// (`Wed, 01 Jan 2020 00:00:00 GMT`); otherwise the time is shown in the local
/// offset, or UTC where the host cannot report one.
pub fn format_timestamp(ts: &str, as_utc: bool) -> String {
    let Some(at) = parse_utc(ts) else {
        return ts.to_owned();
    };
    let rendered = if as_utc {
        at.format(GMT)
    } else {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        at.to_offset(offset).format(LOCAL)
    };
    rendered.unwrap_or_else(|_| ts.to_owned())
}
