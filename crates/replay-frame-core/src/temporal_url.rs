// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Temporal URL construction.
//!
//! A temporal URL is `prefix [timestamp] ["mp_"] "/" original-url`. The outer
//! form is what the wrapper page's address bar and history show; the inner
//! form carries the nested-rewrite marker and is what the iframe loads.

/// Path token marking a URL as already rewritten for in-frame use.
pub const NESTED_REWRITE_MARKER: &str = "mp_";

/// Builds outer and inner temporal URLs under a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCodec {
    prefix: String,
}

impl UrlCodec {
    /// Codec rooted at `prefix` (e.g. `/web/`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix every URL is rooted under.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Wrapper-visible address: `prefix + ts + "/" + url`, or `prefix + url`
    /// when `ts` is empty.
    pub fn outer_url(&self, url: &str, ts: &str) -> String {
        if ts.is_empty() {
            format!("{}{url}", self.prefix)
        } else {
            format!("{}{ts}/{url}", self.prefix)
        }
    }

    /// Frame-visible address, tagged with the nested-rewrite marker.
    pub fn inner_url(&self, url: &str, ts: &str) -> String {
        format!("{}{ts}{NESTED_REWRITE_MARKER}/{url}", self.prefix)
    }
}

/// Original URL embedded in a temporal URL.
///
/// Everything after the first `/http:`, or failing that the first `/https:`,
/// is returned; `""` when neither is present.
///
/// ```
/// use replay_frame_core::extract_replay_url;
///
/// let url = extract_replay_url("http://host/web/2020mp_/https://example.com/a");
/// assert_eq!(url, "https://example.com/a");
/// ```
pub fn extract_replay_url(rewritten: &str) -> String {
    rewritten
        .find("/http:")
        .or_else(|| rewritten.find("/https:"))
        .map(|inx| rewritten[inx + 1..].to_owned())
        .unwrap_or_default()
}
