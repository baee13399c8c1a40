// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browsing-context port: everything the core needs from the browser.

use crate::state::{ReplayConfig, ReplayState};

/// Capability port over the wrapper window, its replay iframe and its DOM.
///
/// Implementors are thin adapters (web-sys in the browser, an in-memory fake
/// in tests). No method may fail: unavailable data is reported as `None` or
/// `""`, and writes to absent targets are dropped.
///
/// # Ordering
///
/// [`set_navigation_target`](Self::set_navigation_target) must only schedule
/// the frame load. The resulting load event is delivered later as a separate
/// call into the navigator, never from inside this method.
pub trait BrowsingContext {
    /// Raw `location.href` of the replay frame's document, `None` when the
    /// document cannot be read (cross-origin or detached frame).
    fn frame_location(&self) -> Option<String>;

    /// Canonical (un-rewritten) location reported by the frame's own
    /// instrumentation, if it exposes one.
    fn frame_canonical_location(&self) -> Option<String>;

    /// Replay config injected into the frame's document, if any.
    fn frame_replay_config(&self) -> Option<ReplayConfig>;

    /// Cookie string of the frame's document.
    fn frame_cookies(&self) -> String;

    /// Address the frame was last told to load.
    fn navigation_target(&self) -> Option<String>;

    /// Point the frame at `url`.
    fn set_navigation_target(&mut self, url: &str);

    /// Replace the current history entry's payload and visible address.
    fn replace_history_entry(&mut self, state: &ReplayState, url: &str);

    /// Payload of the current history entry.
    fn current_history_entry(&self) -> Option<ReplayState>;

    /// Text of the element with `id`, `None` if absent.
    fn element_text(&self, id: &str) -> Option<String>;

    /// Set the text of the element with `id`. Returns `false` if absent.
    fn set_element_text(&mut self, id: &str, text: &str) -> bool;
}
