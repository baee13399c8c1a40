// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Replay server fake: turns frame navigation targets into frame documents.

use replay_frame_core::{format_timestamp, ReplayConfig, UrlCodec, NESTED_REWRITE_MARKER};

use crate::document::FrameDocument;

/// Resolves temporal URLs the way a replay server would serve them into the
/// frame: the document ends up at the inner URL, with or without an injected
/// replay config.
///
/// # Example
///
/// ```
/// use replay_frame_dry_tests::ReplayServerFake;
///
/// let server = ReplayServerFake::new("http://localhost", "/web/");
/// let doc = server.serve("/web/20200101000000/http://a.com/");
///
/// assert_eq!(
///     doc.location.as_deref(),
///     Some("http://localhost/web/20200101000000mp_/http://a.com/")
/// );
/// assert_eq!(doc.replay_config.unwrap().timestamp, "20200101000000");
/// ```
#[derive(Debug, Clone)]
pub struct ReplayServerFake {
    origin: String,
    codec: UrlCodec,
    inject_config: bool,
}

impl ReplayServerFake {
    /// Server at `origin` rooting temporal URLs under `prefix`; injects a
    /// replay config into every document.
    pub fn new(origin: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            codec: UrlCodec::new(prefix),
            inject_config: true,
        }
    }

    /// Serve documents without an injected replay config.
    pub fn without_config(mut self) -> Self {
        self.inject_config = false;
        self
    }

    /// Split a temporal URL (outer or inner, with or without origin) into
    /// `(original url, timestamp)`.
    pub fn parse(&self, target: &str) -> Option<(String, String)> {
        let path = target.strip_prefix(&self.origin).unwrap_or(target);
        let rest = path.strip_prefix(self.codec.prefix())?;

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (ts, tail) = rest.split_at(digits);
        let tail = tail.strip_prefix(NESTED_REWRITE_MARKER).unwrap_or(tail);
        match tail.strip_prefix('/') {
            Some(url) => Some((url.to_owned(), ts.to_owned())),
            None if ts.is_empty() => Some((tail.to_owned(), String::new())),
            None => None,
        }
    }

    /// Document the frame shows after loading `target`. Unparseable targets
    /// yield a bare document at `target`.
    pub fn serve(&self, target: &str) -> FrameDocument {
        let Some((url, ts)) = self.parse(target) else {
            return FrameDocument::at(target);
        };
        let location = format!("{}{}", self.origin, self.codec.inner_url(&url, &ts));
        let doc = FrameDocument::at(location);
        if !self.inject_config {
            return doc;
        }
        doc.with_config(ReplayConfig {
            prefix: self.codec.prefix().to_owned(),
            capture_label: format_timestamp(&ts, true),
            is_live: ts.is_empty(),
            timestamp: ts,
            labels: None,
        })
    }
}
