// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame navigation orchestration.
//!
//! Two triggers, each run to completion:
//!
//! 1. the replay frame finished loading: work out what it shows and hand a
//!    [`NavigationSnapshot`] to the injected [`SyncStrategy`];
//! 2. the browser delivered a history entry on back/forward: restore it.

use tracing::{debug, warn};

use crate::config::FrameConfig;
use crate::context::BrowsingContext;
use crate::history::{HistoryManager, NavigationSnapshot, SyncStrategy};
use crate::state::ReplayState;
use crate::temporal_url::extract_replay_url;
use crate::timestamp::{extract_timestamp_from_cookie, extract_timestamp_from_url, format_timestamp};

/// Load and back/forward handler for the replay frame.
///
/// `S` is the sync policy run on every load; [`FrameNavigator::new`] uses the
/// [`HistoryManager`] itself.
#[derive(Debug)]
pub struct FrameNavigator<S = HistoryManager> {
    history: HistoryManager,
    strategy: S,
}

impl FrameNavigator<HistoryManager> {
    /// Navigator that records every load into history.
    pub fn new(config: &FrameConfig) -> Self {
        let history = HistoryManager::new(config);
        Self {
            strategy: history.clone(),
            history,
        }
    }
}

impl<S: SyncStrategy> FrameNavigator<S> {
    /// Navigator running `strategy` on every load instead of the default
    /// history recording. Back/forward restores still go through the
    /// history manager.
    pub fn with_strategy(config: &FrameConfig, strategy: S) -> Self {
        Self {
            history: HistoryManager::new(config),
            strategy,
        }
    }

    /// The history manager used for restores.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// The injected sync policy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Mutable access to the injected sync policy.
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Inspect the frame's current document and sync it.
    ///
    /// An injected replay config wins over URL/cookie derivation. Without one,
    /// a document whose URL carries no timestamp is treated as live and the
    /// timestamp cookie is consulted instead.
    ///
    /// Returns `None` without syncing when the frame's location is unreadable;
    /// the current history entry and status slots stay as they were.
    pub fn on_frame_loaded(
        &mut self,
        ctx: &mut dyn BrowsingContext,
    ) -> Option<NavigationSnapshot> {
        let Some(snapshot) = Self::inspect(ctx) else {
            warn!("frame location unreadable; leaving history as is");
            return None;
        };
        debug!(
            url = %snapshot.url,
            timestamp = %snapshot.timestamp,
            is_live = snapshot.is_live,
            "frame loaded"
        );
        self.strategy.sync(ctx, &snapshot);
        Some(snapshot)
    }

    fn inspect(ctx: &dyn BrowsingContext) -> Option<NavigationSnapshot> {
        let location = ctx.frame_location()?;
        let url = ctx
            .frame_canonical_location()
            .unwrap_or_else(|| extract_replay_url(&location));

        if let Some(cfg) = ctx.frame_replay_config() {
            return Some(NavigationSnapshot {
                url,
                timestamp: cfg.timestamp,
                capture_label: cfg.capture_label,
                is_live: cfg.is_live,
            });
        }

        let mut is_live = false;
        let mut timestamp = extract_timestamp_from_url(&location);
        if timestamp.is_empty() {
            is_live = true;
            timestamp = extract_timestamp_from_cookie(&ctx.frame_cookies());
        }
        Some(NavigationSnapshot {
            capture_label: format_timestamp(&timestamp, true),
            url,
            timestamp,
            is_live,
        })
    }

    /// Handle a back/forward event. Returns `true` if a state was restored;
    /// entries without a state (initial or external) are ignored.
    pub fn on_history_navigated(
        &mut self,
        ctx: &mut dyn BrowsingContext,
        state: Option<&ReplayState>,
    ) -> bool {
        match state {
            Some(state) => {
                self.history.restore_state(ctx, state);
                true
            }
            None => {
                debug!("history entry without replay state");
                false
            }
        }
    }

    /// [`on_history_navigated`](Self::on_history_navigated) for payloads
    /// delivered as JSON. Undecodable payloads count as "no state".
    pub fn on_history_navigated_raw(
        &mut self,
        ctx: &mut dyn BrowsingContext,
        payload: Option<&str>,
    ) -> bool {
        let state = payload.and_then(|raw| match ReplayState::from_json(raw) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(%err, "ignoring undecodable history payload");
                None
            }
        });
        self.on_history_navigated(ctx, state.as_ref())
    }
}
