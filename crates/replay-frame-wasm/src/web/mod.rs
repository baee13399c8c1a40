// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wrapper-page event wiring.

mod context;

pub use context::WebBrowsingContext;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function};
use replay_frame_core::{
    BrowsingContext, FrameNavigator, HistoryManager, NavigationSnapshot, ReplayState, SyncStrategy,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, EventTarget, PopStateEvent};

use crate::exports::load_config;

/// Sync policy selectable from JavaScript.
enum SyncHook {
    /// Record every load into history.
    Record(HistoryManager),
    /// Hand every load to `(url, timestamp, captureLabel, isLive) => void`.
    Js(Function),
}

impl SyncStrategy for SyncHook {
    fn sync(&mut self, ctx: &mut dyn BrowsingContext, snapshot: &NavigationSnapshot) {
        match self {
            Self::Record(history) => history.sync(ctx, snapshot),
            Self::Js(hook) => {
                let args = Array::of4(
                    &JsValue::from_str(&snapshot.url),
                    &JsValue::from_str(&snapshot.timestamp),
                    &JsValue::from_str(&snapshot.capture_label),
                    &JsValue::from_bool(snapshot.is_live),
                );
                if let Err(err) = hook.apply(&JsValue::NULL, &args) {
                    console::error_2(&JsValue::from_str("sync hook threw:"), &err);
                }
            }
        }
    }
}

/// Replay state carried by a popstate event. Entries without state, or with
/// state some other script pushed, yield `None`.
fn popstate_state(event: Event) -> Option<ReplayState> {
    let raw = event.dyn_into::<PopStateEvent>().ok()?.state();
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value(raw) {
        Ok(state) => Some(state),
        Err(err) => {
            console::warn_2(
                &JsValue::from_str("ignoring foreign history state:"),
                &JsValue::from(err),
            );
            None
        }
    }
}

struct Session {
    ctx: WebBrowsingContext,
    nav: FrameNavigator<SyncHook>,
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Keeps the wrapper page's history and status slots in step with the
/// replay iframe.
///
/// Listeners attached by [`install`](Self::install) are removed when the
/// instance is freed.
#[wasm_bindgen]
pub struct FrameSync {
    session: Rc<RefCell<Session>>,
    history: HistoryManager,
    iframe_id: String,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl FrameSync {
    /// Bind to the iframe `iframe_id` using the JSON wrapper config.
    ///
    /// `hook`, when given, replaces history recording on every frame load.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        iframe_id: &str,
        hook: Option<Function>,
    ) -> Result<FrameSync, JsValue> {
        #[cfg(feature = "console-panic")]
        console_error_panic_hook::set_once();

        let config = load_config(config_json).map_err(|e| JsValue::from_str(&e))?;
        let ctx = WebBrowsingContext::new(iframe_id)?;
        let history = HistoryManager::new(&config);
        let strategy = match hook {
            Some(hook) => SyncHook::Js(hook),
            None => SyncHook::Record(history.clone()),
        };
        let nav = FrameNavigator::with_strategy(&config, strategy);

        Ok(Self {
            session: Rc::new(RefCell::new(Session { ctx, nav })),
            history,
            iframe_id: iframe_id.to_owned(),
            listeners: Vec::new(),
        })
    }

    /// Attach the iframe `load` and window `popstate` listeners. Calling it
    /// again is a no-op.
    pub fn install(&mut self) -> Result<(), JsValue> {
        if !self.listeners.is_empty() {
            return Ok(());
        }
        let (iframe, window): (EventTarget, EventTarget) = {
            let session = self.session.borrow();
            (
                session.ctx.iframe().clone().into(),
                session.ctx.window().clone().into(),
            )
        };

        let session = Rc::clone(&self.session);
        let on_load = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let Ok(mut guard) = session.try_borrow_mut() else {
                console::warn_1(&JsValue::from_str("frame load re-entered; skipped"));
                return;
            };
            let Session { ctx, nav } = &mut *guard;
            if nav.on_frame_loaded(ctx).is_none() {
                console::warn_1(&JsValue::from_str("frame location unreadable; history kept"));
            }
        });
        self.listen(iframe, "load", on_load)?;

        let session = Rc::clone(&self.session);
        let on_popstate = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let state = popstate_state(event);
            let Ok(mut guard) = session.try_borrow_mut() else {
                console::warn_1(&JsValue::from_str("popstate re-entered; skipped"));
                return;
            };
            let Session { ctx, nav } = &mut *guard;
            nav.on_history_navigated(ctx, state.as_ref());
        });
        self.listen(window, "popstate", on_popstate)
    }

    /// Replace the load policy with `hook`, or restore history recording
    /// when `hook` is omitted.
    #[wasm_bindgen(js_name = setSyncHook)]
    pub fn set_sync_hook(&mut self, hook: Option<Function>) -> Result<(), JsValue> {
        let mut session = self
            .session
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot replace the sync hook while it runs"))?;
        *session.nav.strategy_mut() = match hook {
            Some(hook) => SyncHook::Js(hook),
            None => SyncHook::Record(self.history.clone()),
        };
        Ok(())
    }

    /// Default history recording, callable from a custom sync hook.
    #[wasm_bindgen(js_name = recordState)]
    pub fn record_state(
        &self,
        url: &str,
        timestamp: &str,
        capture_label: &str,
        is_live: bool,
    ) -> Result<(), JsValue> {
        let mut ctx = WebBrowsingContext::new(&self.iframe_id)?;
        self.history
            .record_state(&mut ctx, url, timestamp, capture_label, is_live);
        Ok(())
    }

    /// Outer URL of the current history entry, if it carries replay state.
    #[wasm_bindgen(js_name = currentOuterUrl)]
    pub fn current_outer_url(&self) -> Option<String> {
        let session = self.session.try_borrow().ok()?;
        session
            .ctx
            .current_history_entry()
            .map(|state| state.outer_url().to_owned())
    }
}

impl FrameSync {
    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            event,
            callback,
        });
        Ok(())
    }
}

impl Drop for FrameSync {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
