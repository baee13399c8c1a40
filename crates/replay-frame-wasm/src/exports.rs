// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stateless codec helpers exposed to JavaScript.

use replay_frame_core::{
    extract_replay_url as core_extract_replay_url, extract_timestamp_from_cookie,
    extract_timestamp_from_url, format_timestamp as core_format_timestamp, FrameConfig, UrlCodec,
};
use tracing::warn;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Outer (wrapper-visible) temporal URL.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = makeOuterUrl))]
pub fn make_outer_url(prefix: &str, url: &str, ts: &str) -> String {
    UrlCodec::new(prefix).outer_url(url, ts)
}

/// Inner (frame-visible) temporal URL.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = makeInnerUrl))]
pub fn make_inner_url(prefix: &str, url: &str, ts: &str) -> String {
    UrlCodec::new(prefix).inner_url(url, ts)
}

/// Capture timestamp encoded before the nested-rewrite marker, or `""`.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = extractTimestamp))]
pub fn extract_timestamp(url: &str) -> String {
    extract_timestamp_from_url(url)
}

/// Capture timestamp carried by the timestamp cookie, or `""`.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = extractCookieTimestamp))]
pub fn extract_cookie_timestamp(cookie: &str) -> String {
    extract_timestamp_from_cookie(cookie)
}

/// Original URL embedded in a temporal URL, or `""`.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = extractReplayUrl))]
pub fn extract_replay_url(url: &str) -> String {
    core_extract_replay_url(url)
}

/// Display form of a capture timestamp.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = formatTimestamp))]
pub fn format_timestamp(ts: &str, utc: bool) -> String {
    core_format_timestamp(ts, utc)
}

/// Parse the wrapper page's JSON config, rendering errors as text for JS.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn load_config(json: &str) -> Result<FrameConfig, String> {
    FrameConfig::from_json(json).map_err(|err| {
        warn!(%err, "rejected frame config");
        format!("invalid frame config: {err}")
    })
}
