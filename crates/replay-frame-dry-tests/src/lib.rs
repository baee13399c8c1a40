// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for replay-frame crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`context`] - In-memory [`BrowsingContext`](replay_frame_core::BrowsingContext) fake
//! - [`document`] - Frame document builder (location, injected config, cookies)
//! - [`server`] - Replay server fake resolving temporal URLs into frame documents

pub mod context;
pub mod document;
pub mod server;

pub use context::{HistoryEntry, InMemoryBrowsingContext};
pub use document::FrameDocument;
pub use server::ReplayServerFake;
