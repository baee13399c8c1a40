// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wrapper-page configuration supplied by the replay server.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default element id of the capture-info slot.
pub const DEFAULT_CAPTURE_INFO_SLOT: &str = "_wb_capture_info";
/// Default element id of the live/replay label slot.
pub const DEFAULT_LABEL_SLOT: &str = "_wb_label";

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `prefix` was missing or empty; temporal URLs cannot be rooted.
    #[error("missing prefix")]
    MissingPrefix,
    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text written into the label slot for live and archived pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// Shown while the iframe renders a live (non-archived) page.
    pub live: String,
    /// Shown while the iframe renders an archived capture.
    pub replay: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            live: "Live on".to_owned(),
            replay: "Archived".to_owned(),
        }
    }
}

/// Element ids of the two optional status slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusSlots {
    /// Slot receiving the capture label.
    pub capture_info: String,
    /// Slot receiving the live/replay label.
    pub label: String,
}

impl Default for StatusSlots {
    fn default() -> Self {
        Self {
            capture_info: DEFAULT_CAPTURE_INFO_SLOT.to_owned(),
            label: DEFAULT_LABEL_SLOT.to_owned(),
        }
    }
}

/// Configuration of the wrapper page.
///
/// Only `prefix` is required; labels and slot ids fall back to defaults.
///
/// ```
/// use replay_frame_core::FrameConfig;
///
/// let cfg = FrameConfig::from_json(r#"{ "prefix": "/web/" }"#).unwrap();
/// assert_eq!(cfg.prefix, "/web/");
/// assert_eq!(cfg.slots.label, "_wb_label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Base path under which every temporal URL is rooted, e.g. `/web/`.
    #[serde(default)]
    pub prefix: String,
    /// Label texts.
    #[serde(default)]
    pub labels: StatusLabels,
    /// Status slot ids.
    #[serde(default)]
    pub slots: StatusSlots,
}

impl FrameConfig {
    /// Config rooted at `prefix` with default labels and slots.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            labels: StatusLabels::default(),
            slots: StatusSlots::default(),
        }
    }

    /// Replace the label texts.
    pub fn with_labels(mut self, live: impl Into<String>, replay: impl Into<String>) -> Self {
        self.labels = StatusLabels {
            live: live.into(),
            replay: replay.into(),
        };
        self
    }

    /// Replace the status slot ids.
    pub fn with_slots(mut self, capture_info: impl Into<String>, label: impl Into<String>) -> Self {
        self.slots = StatusSlots {
            capture_info: capture_info.into(),
            label: label.into(),
        };
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Reject configs that cannot root a temporal URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::MissingPrefix);
        }
        Ok(())
    }
}
