// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! web-sys implementation of [`BrowsingContext`].

use js_sys::Reflect;
use replay_frame_core::{BrowsingContext, ReplayConfig, ReplayState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlIFrameElement, Window};

/// Global the replay frame's instrumentation uses for the canonical location.
const CANONICAL_LOCATION_GLOBAL: &str = "WB_wombat_location";
/// Global the replay server injects the snapshot description into.
const REPLAY_CONFIG_GLOBAL: &str = "wbinfo";

/// Browsing context over the wrapper window and one replay iframe.
///
/// Cross-origin frames, missing globals and DOM exceptions all degrade to
/// "absent" values; nothing here throws back into the core.
pub struct WebBrowsingContext {
    window: Window,
    document: Document,
    iframe: HtmlIFrameElement,
}

impl WebBrowsingContext {
    /// Context for the iframe with element id `iframe_id`.
    pub fn new(iframe_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let iframe = document
            .get_element_by_id(iframe_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{iframe_id}")))?
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| JsValue::from_str(&format!("#{iframe_id} is not an iframe")))?;
        Ok(Self {
            window,
            document,
            iframe,
        })
    }

    /// The wrapper window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The replay iframe.
    pub fn iframe(&self) -> &HtmlIFrameElement {
        &self.iframe
    }

    fn frame_global(&self, name: &str) -> Option<JsValue> {
        let frame = self.iframe.content_window()?;
        Reflect::get(&frame, &JsValue::from_str(name))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }
}

/// Injected configs are plain JS objects that may still use the snake_case
/// field names, so they go through JSON where serde's aliases apply.
pub(crate) fn decode_replay_config(raw: &JsValue) -> Option<ReplayConfig> {
    let json = js_sys::JSON::stringify(raw).ok()?.as_string()?;
    ReplayConfig::from_json(&json).ok()
}

impl BrowsingContext for WebBrowsingContext {
    fn frame_location(&self) -> Option<String> {
        self.iframe
            .content_window()
            .and_then(|w| w.location().href().ok())
    }

    fn frame_canonical_location(&self) -> Option<String> {
        let location = self.frame_global(CANONICAL_LOCATION_GLOBAL)?;
        Reflect::get(&location, &JsValue::from_str("href"))
            .ok()?
            .as_string()
    }

    fn frame_replay_config(&self) -> Option<ReplayConfig> {
        decode_replay_config(&self.frame_global(REPLAY_CONFIG_GLOBAL)?)
    }

    fn frame_cookies(&self) -> String {
        self.iframe
            .content_document()
            .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn navigation_target(&self) -> Option<String> {
        Some(self.iframe.src()).filter(|src| !src.is_empty())
    }

    fn set_navigation_target(&mut self, url: &str) {
        self.iframe.set_src(url);
    }

    fn replace_history_entry(&mut self, state: &ReplayState, url: &str) {
        let result = serde_wasm_bindgen::to_value(state)
            .map_err(JsValue::from)
            .and_then(|payload| self.window.history().map(|h| (h, payload)))
            .and_then(|(history, payload)| history.replace_state_with_url(&payload, "", Some(url)));
        if let Err(err) = result {
            web_sys::console::warn_2(&JsValue::from_str("replaceState failed:"), &err);
        }
    }

    fn current_history_entry(&self) -> Option<ReplayState> {
        let raw = self.window.history().ok()?.state().ok()?;
        serde_wasm_bindgen::from_value(raw).ok()
    }

    fn element_text(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.text_content().unwrap_or_default())
    }

    fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}
