// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory browsing context fake for testing without a browser.

use std::collections::HashMap;

use replay_frame_core::{BrowsingContext, ReplayConfig, ReplayState};

use crate::document::FrameDocument;

/// One entry of the fake session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Address shown for the entry.
    pub url: String,
    /// Payload attached via replace, if any.
    pub state: Option<ReplayState>,
}

/// In-memory implementation of [`BrowsingContext`].
///
/// Models a session history with a cursor, a replay frame showing a
/// [`FrameDocument`], and a set of element slots. Navigating the frame only
/// records the pending target; tests decide when the load "completes" by
/// calling [`load`](Self::load).
///
/// # Example
///
/// ```
/// use replay_frame_core::{BrowsingContext, FrameConfig, HistoryManager};
/// use replay_frame_dry_tests::InMemoryBrowsingContext;
///
/// let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
/// let history = HistoryManager::new(&FrameConfig::new("/web/"));
///
/// history.record_state(&mut ctx, "http://a.com/", "2020", "label", false);
/// history.record_state(&mut ctx, "http://a.com/", "2020", "label", false);
///
/// assert_eq!(ctx.history_len(), 1);
/// assert_eq!(ctx.replace_count(), 2);
/// assert_eq!(ctx.element_text("_wb_label").as_deref(), Some("Archived"));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryBrowsingContext {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    document: FrameDocument,
    navigation_target: Option<String>,
    navigations: Vec<String>,
    elements: HashMap<String, String>,
    replace_count: usize,
}

impl InMemoryBrowsingContext {
    /// Fresh context whose single history entry shows `initial_url` with no
    /// state, and whose frame has not loaded a readable document yet. No
    /// element slots exist.
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.into(),
                state: None,
            }],
            cursor: 0,
            document: FrameDocument::default(),
            navigation_target: None,
            navigations: Vec::new(),
            elements: HashMap::new(),
            replace_count: 0,
        }
    }

    /// Add an empty element slot with `id`.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), String::new());
        self
    }

    /// Add both default status slots (`_wb_capture_info`, `_wb_label`).
    pub fn with_status_slots(self) -> Self {
        self.with_element("_wb_capture_info").with_element("_wb_label")
    }

    /// Complete a frame load: the frame now shows `document`.
    pub fn load(&mut self, document: FrameDocument) {
        self.document = document;
    }

    /// Document currently shown in the frame.
    pub fn document(&self) -> &FrameDocument {
        &self.document
    }

    /// Take the pending frame navigation, if one was requested.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation_target.take()
    }

    /// Every target the frame was pointed at, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Simulate the user following a link in the wrapper: a new entry without
    /// state is pushed after the cursor, discarding any forward entries.
    pub fn push_entry(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            url: url.into(),
            state: None,
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Simulate the back button. Returns the popped-to entry's state, or
    /// `None` (and no movement) at the start of history.
    pub fn go_back(&mut self) -> Option<Option<ReplayState>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].state.clone())
    }

    /// Simulate the forward button. Mirrors [`go_back`](Self::go_back).
    pub fn go_forward(&mut self) -> Option<Option<ReplayState>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].state.clone())
    }

    /// Number of session history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// All session history entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Current entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Number of history replacements performed.
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    /// Remove every element slot.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }
}

impl BrowsingContext for InMemoryBrowsingContext {
    fn frame_location(&self) -> Option<String> {
        self.document.location.clone()
    }

    fn frame_canonical_location(&self) -> Option<String> {
        self.document.canonical_location.clone()
    }

    fn frame_replay_config(&self) -> Option<ReplayConfig> {
        self.document.replay_config.clone()
    }

    fn frame_cookies(&self) -> String {
        self.document.cookies.clone()
    }

    fn navigation_target(&self) -> Option<String> {
        self.navigations.last().cloned()
    }

    fn set_navigation_target(&mut self, url: &str) {
        self.navigation_target = Some(url.to_owned());
        self.navigations.push(url.to_owned());
    }

    fn replace_history_entry(&mut self, state: &ReplayState, url: &str) {
        self.replace_count += 1;
        let entry = &mut self.entries[self.cursor];
        entry.url = url.to_owned();
        entry.state = Some(state.clone());
    }

    fn current_history_entry(&self) -> Option<ReplayState> {
        self.entries[self.cursor].state.clone()
    }

    fn element_text(&self, id: &str) -> Option<String> {
        self.elements.get(id).cloned()
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                text.clone_into(slot);
                true
            }
            None => false,
        }
    }
}
