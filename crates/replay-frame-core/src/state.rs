// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! History-entry payload and the replay config injected by archived documents.

use serde::{Deserialize, Serialize};

use crate::config::StatusLabels;
use crate::temporal_url::UrlCodec;

/// Payload attached to each wrapper-page history entry.
///
/// Serialized in camelCase; this shape is the compatibility contract with
/// entries already sitting in users' history stacks. Outer and inner URLs are
/// always derived from `(url, timestamp)` through a [`UrlCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayState {
    timestamp: String,
    outer_url: String,
    inner_url: String,
    url: String,
    capture_label: String,
    is_live: bool,
}

impl ReplayState {
    /// Build a state for `url` at `timestamp`, deriving both temporal URLs.
    pub fn new(
        codec: &UrlCodec,
        url: impl Into<String>,
        timestamp: impl Into<String>,
        capture_label: impl Into<String>,
        is_live: bool,
    ) -> Self {
        let url = url.into();
        let timestamp = timestamp.into();
        Self {
            outer_url: codec.outer_url(&url, &timestamp),
            inner_url: codec.inner_url(&url, &timestamp),
            timestamp,
            url,
            capture_label: capture_label.into(),
            is_live,
        }
    }

    /// Capture timestamp, `""` when unknown.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Wrapper-visible address.
    pub fn outer_url(&self) -> &str {
        &self.outer_url
    }

    /// Frame-visible address.
    pub fn inner_url(&self) -> &str {
        &self.inner_url
    }

    /// Original (un-rewritten) URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Human-readable capture description.
    pub fn capture_label(&self) -> &str {
        &self.capture_label
    }

    /// Whether the page was served live rather than from the archive.
    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Encode as the JSON history payload.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a JSON history payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Snapshot description injected into an archived document by the replay
/// server. Every field is optional on the wire.
///
/// Both the camelCase names and the older snake_case spellings (`is_live`,
/// `capture_str`) are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplayConfig {
    /// Base path for temporal URLs as seen by the archived document.
    pub prefix: String,
    /// Capture timestamp of the document.
    pub timestamp: String,
    /// Whether the document was fetched live.
    #[serde(alias = "is_live")]
    pub is_live: bool,
    /// Display text for the capture.
    #[serde(alias = "capture_str")]
    pub capture_label: String,
    /// Labels the document would like shown; informational only.
    pub labels: Option<StatusLabels>,
}

impl ReplayConfig {
    /// Decode an injected config from JSON, accepting either spelling.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_derives_urls_from_codec() {
        let codec = UrlCodec::new("/web/");
        let state = ReplayState::new(&codec, "http://a.com/", "2020", "label", false);
        assert_eq!(state.outer_url(), "/web/2020/http://a.com/");
        assert_eq!(state.inner_url(), "/web/2020mp_/http://a.com/");
        assert_eq!(state.url(), "http://a.com/");
        assert!(!state.is_live());
    }

    #[test]
    fn history_payload_uses_camel_case_keys() {
        let codec = UrlCodec::new("/web/");
        let state = ReplayState::new(&codec, "http://a.com/", "", "Live", true);
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "timestamp": "",
                "outerUrl": "/web/http://a.com/",
                "innerUrl": "/web/mp_/http://a.com/",
                "url": "http://a.com/",
                "captureLabel": "Live",
                "isLive": true,
            })
        );
        assert_eq!(ReplayState::from_json(&state.to_json().unwrap()).unwrap(), state);
    }

    #[test]
    fn replay_config_accepts_legacy_names() {
        let cfg = ReplayConfig::from_json(
            r#"{"prefix":"/web/","timestamp":"2020","is_live":true,"capture_str":"Jan 2020"}"#,
        )
        .unwrap();
        assert!(cfg.is_live);
        assert_eq!(cfg.capture_label, "Jan 2020");
        assert_eq!(cfg.labels, None);
    }

    #[test]
    fn replay_config_defaults_missing_fields() {
        let cfg: ReplayConfig =
            serde_json::from_str(r#"{"timestamp":"2020","labels":{"live":"L"}}"#).unwrap();
        assert_eq!(cfg.prefix, "");
        assert!(!cfg.is_live);
        assert_eq!(cfg.labels.map(|l| l.replay), Some("Archived".to_owned()));
    }
}
