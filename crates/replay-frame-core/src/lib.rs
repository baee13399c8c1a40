// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame synchronization core for a web-archive replay wrapper page.
//!
//! The wrapper page embeds an iframe that renders archived content. This crate
//! keeps the browser history, the capture status label and the temporal URL
//! scheme consistent while the user navigates inside that iframe.
//!
//! # Modules
//!
//! - [`timestamp`] - capture timestamp extraction (URL, cookie) and display formatting
//! - [`temporal_url`] - outer/inner temporal URL construction and original URL recovery
//! - [`status`] - capture-info and live/replay label rendering
//! - [`history`] - replay state recording/restoring and the [`SyncStrategy`] seam
//! - [`navigator`] - iframe load and back/forward event handling
//! - [`context`] - the [`BrowsingContext`] capability the core runs against
//!
//! # Design
//!
//! The browser is never touched directly. Everything goes through
//! [`BrowsingContext`]; the web-sys implementation lives in `replay-frame-wasm`
//! and an in-memory fake lives in `replay-frame-dry-tests`.
//!
//! Absence is not an error here: a missing timestamp is `""`, a missing status
//! slot is skipped, a missing injected config falls back to URL/cookie
//! derivation. Only configuration loading returns [`ConfigError`].

#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod history;
pub mod navigator;
pub mod state;
pub mod status;
pub mod temporal_url;
pub mod timestamp;

pub use config::{ConfigError, FrameConfig, StatusLabels, StatusSlots};
pub use context::BrowsingContext;
pub use history::{HistoryManager, NavigationSnapshot, SyncStrategy};
pub use navigator::FrameNavigator;
pub use state::{ReplayConfig, ReplayState};
pub use status::{StatusNotifier, StatusOutcome};
pub use temporal_url::{extract_replay_url, UrlCodec, NESTED_REWRITE_MARKER};
pub use timestamp::{
    extract_timestamp_from_cookie, extract_timestamp_from_url, format_timestamp,
    TIMESTAMP_COOKIE, TIMESTAMP_LEN,
};
