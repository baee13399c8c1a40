// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! History state recording and restoring.
//!
//! The wrapper page's history entry for the current archived page already
//! exists whenever the frame (re)loads, so recording always *replaces* the
//! current entry. Back/forward therefore never grows the stack: restore points
//! the frame at the stored outer URL, the frame loads, and the load handler
//! records the same state again in place.

use tracing::debug;

use crate::config::FrameConfig;
use crate::context::BrowsingContext;
use crate::state::ReplayState;
use crate::status::StatusNotifier;
use crate::temporal_url::UrlCodec;

/// What the navigator learned about the frame's current document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSnapshot {
    /// Original URL of the document.
    pub url: String,
    /// Capture timestamp, `""` when unknown.
    pub timestamp: String,
    /// Display text for the capture.
    pub capture_label: String,
    /// Whether the document was served live.
    pub is_live: bool,
}

/// Policy run by the navigator on every frame load.
///
/// The default policy is [`HistoryManager`], which records the snapshot as the
/// current history entry. Closures taking `(ctx, snapshot)` also qualify.
pub trait SyncStrategy {
    /// Synchronize the wrapper page with `snapshot`.
    fn sync(&mut self, ctx: &mut dyn BrowsingContext, snapshot: &NavigationSnapshot);
}

impl<F> SyncStrategy for F
where
    F: FnMut(&mut dyn BrowsingContext, &NavigationSnapshot),
{
    fn sync(&mut self, ctx: &mut dyn BrowsingContext, snapshot: &NavigationSnapshot) {
        self(ctx, snapshot);
    }
}

/// Owns the wrapper page's history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryManager {
    codec: UrlCodec,
    notifier: StatusNotifier,
}

impl HistoryManager {
    /// Manager rooted at `config.prefix`, using its labels and slots.
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            codec: UrlCodec::new(config.prefix.clone()),
            notifier: StatusNotifier::new(config),
        }
    }

    /// Temporal URL codec in use.
    pub fn codec(&self) -> &UrlCodec {
        &self.codec
    }

    /// Status notifier in use.
    pub fn notifier(&self) -> &StatusNotifier {
        &self.notifier
    }

    /// Replace the current history entry with a state for `url` at
    /// `timestamp` and refresh the status slots.
    ///
    /// Repeating the call with equal inputs leaves history unchanged.
    pub fn record_state(
        &self,
        ctx: &mut dyn BrowsingContext,
        url: &str,
        timestamp: &str,
        capture_label: &str,
        is_live: bool,
    ) -> ReplayState {
        let state = ReplayState::new(&self.codec, url, timestamp, capture_label, is_live);
        ctx.replace_history_entry(&state, state.outer_url());
        debug!(
            outer_url = %state.outer_url(),
            timestamp = %state.timestamp(),
            is_live,
            "recorded replay state"
        );
        self.notifier
            .update_status(ctx, state.capture_label(), state.is_live());
        state
    }

    /// Bring the frame back to a state delivered by back/forward navigation.
    ///
    /// History is not touched; the frame load this schedules records the
    /// state again. The frame target is re-derived from the state's
    /// `(url, timestamp)`, so a payload carrying a foreign `outerUrl` cannot
    /// steer the frame elsewhere.
    pub fn restore_state(&self, ctx: &mut dyn BrowsingContext, state: &ReplayState) {
        self.notifier
            .update_status(ctx, state.capture_label(), state.is_live());
        let target = self.codec.outer_url(state.url(), state.timestamp());
        ctx.set_navigation_target(&target);
        debug!(outer_url = %target, "restoring replay state");
    }
}

impl SyncStrategy for HistoryManager {
    fn sync(&mut self, ctx: &mut dyn BrowsingContext, snapshot: &NavigationSnapshot) {
        self.record_state(
            ctx,
            &snapshot.url,
            &snapshot.timestamp,
            &snapshot.capture_label,
            snapshot.is_live,
        );
    }
}
