// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Browser bridge for the replay frame synchronization core.
//!
//! On `wasm32` this crate exports a [`FrameSync`] class that wires the
//! wrapper page's replay iframe and `popstate` events into
//! [`replay_frame_core::FrameNavigator`], plus the stateless codec helpers in
//! [`exports`]. On other targets only the codec helpers are compiled, which
//! keeps them testable with a plain `cargo test`.
//!
//! # Usage (from JavaScript)
//!
//! ```js
//! import init, { FrameSync, makeOuterUrl } from 'replay-frame-wasm';
//!
//! await init();
//! const sync = new FrameSync(JSON.stringify({ prefix: "/web/" }), "replay_iframe");
//! sync.install();
//!
//! // Optional: replace history recording with a custom policy.
//! sync.setSyncHook((url, ts, label, isLive) => console.log(url, ts, label, isLive));
//! ```
#![deny(missing_docs)]
#![cfg_attr(target_arch = "wasm32", allow(unsafe_code))]

pub mod exports;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{FrameSync, WebBrowsingContext};
