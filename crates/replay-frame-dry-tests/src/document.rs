// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame document builder for tests.

use replay_frame_core::ReplayConfig;

/// What the replay frame currently shows, as seen through its window object.
///
/// # Example
///
/// ```
/// use replay_frame_dry_tests::FrameDocument;
///
/// let doc = FrameDocument::at("http://localhost/web/2020mp_/http://a.com/")
///     .with_cookies("pywb.timestamp=2020");
///
/// assert!(doc.replay_config.is_none());
/// assert_eq!(doc.cookies, "pywb.timestamp=2020");
/// assert_eq!(FrameDocument::unreadable().location, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDocument {
    /// Raw `location.href`; `None` models a document the wrapper may not
    /// read, such as a cross-origin one.
    pub location: Option<String>,
    /// Canonical location exposed by the frame's instrumentation.
    pub canonical_location: Option<String>,
    /// Injected replay config.
    pub replay_config: Option<ReplayConfig>,
    /// `document.cookie`.
    pub cookies: String,
}

impl FrameDocument {
    /// A bare document at `location`.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// A document whose location is hidden from the wrapper.
    pub fn unreadable() -> Self {
        Self::default()
    }

    /// Set the canonical location.
    pub fn with_canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical_location = Some(url.into());
        self
    }

    /// Set the injected replay config.
    pub fn with_config(mut self, config: ReplayConfig) -> Self {
        self.replay_config = Some(config);
        self
    }

    /// Set the cookie string.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = cookies.into();
        self
    }
}
