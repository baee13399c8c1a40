// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame navigator: load inspection, strategy injection, back/forward loop.

use pretty_assertions::assert_eq;
use replay_frame_core::{
    BrowsingContext, FrameConfig, FrameNavigator, NavigationSnapshot, ReplayConfig,
};
use replay_frame_dry_tests::{FrameDocument, InMemoryBrowsingContext, ReplayServerFake};

const ORIGIN: &str = "http://localhost";

fn config() -> FrameConfig {
    FrameConfig::new("/web/")
}

/// Complete the frame's pending navigation through `server` and fire load.
fn settle(
    nav: &mut FrameNavigator,
    ctx: &mut InMemoryBrowsingContext,
    server: &ReplayServerFake,
) -> Option<NavigationSnapshot> {
    let target = ctx.take_navigation()?;
    ctx.load(server.serve(&target));
    nav.on_frame_loaded(ctx)
}

#[test]
fn injected_config_wins_over_url_and_cookie() {
    let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
    ctx.load(
        FrameDocument::at("http://localhost/web/1999mp_/http://a.com/")
            .with_canonical("http://a.com/#frag")
            .with_cookies("pywb.timestamp=1111")
            .with_config(ReplayConfig {
                timestamp: "20200101000000".into(),
                capture_label: "January 1, 2020".into(),
                ..ReplayConfig::default()
            }),
    );
    let mut nav = FrameNavigator::new(&config());

    let snap = nav.on_frame_loaded(&mut ctx).unwrap();

    assert_eq!(
        snap,
        NavigationSnapshot {
            url: "http://a.com/#frag".into(),
            timestamp: "20200101000000".into(),
            capture_label: "January 1, 2020".into(),
            is_live: false,
        }
    );
    assert_eq!(ctx.current_entry().url, "/web/20200101000000/http://a.com/#frag");
    assert_eq!(ctx.element_text("_wb_capture_info").as_deref(), Some("January 1, 2020"));
}

#[test]
fn url_timestamp_is_used_without_config() {
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    ctx.load(FrameDocument::at(
        "http://localhost/web/20200101000000mp_/http://a.com/page",
    ));
    let mut nav = FrameNavigator::new(&config());

    let snap = nav.on_frame_loaded(&mut ctx).unwrap();

    assert_eq!(snap.url, "http://a.com/page");
    assert_eq!(snap.timestamp, "20200101000000");
    assert_eq!(snap.capture_label, "Wed, 01 Jan 2020 00:00:00 GMT");
    assert!(!snap.is_live);
}

#[test]
fn cookie_timestamp_marks_page_live() {
    let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
    ctx.load(
        FrameDocument::at("http://localhost/live/https://a.com/")
            .with_cookies("sid=1; pywb.timestamp=20210304050607"),
    );
    let mut nav = FrameNavigator::new(&config());

    let snap = nav.on_frame_loaded(&mut ctx).unwrap();

    assert!(snap.is_live);
    assert_eq!(snap.url, "https://a.com/");
    assert_eq!(snap.timestamp, "20210304050607");
    assert_eq!(snap.capture_label, "Thu, 04 Mar 2021 05:06:07 GMT");
    assert_eq!(ctx.element_text("_wb_label").as_deref(), Some("Live on"));
}

#[test]
fn nothing_known_still_syncs() {
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    ctx.load(FrameDocument::at("about:blank"));
    let mut nav = FrameNavigator::new(&config());

    let snap = nav.on_frame_loaded(&mut ctx).unwrap();

    assert_eq!(
        snap,
        NavigationSnapshot {
            is_live: true,
            ..NavigationSnapshot::default()
        }
    );
    assert_eq!(ctx.current_entry().url, "/web/");
    assert_eq!(ctx.history_len(), 1);
}

#[test]
fn unreadable_frame_leaves_history_alone() {
    let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
    ctx.load(FrameDocument::at(
        "http://localhost/web/20200101000000mp_/http://a.com/",
    ));
    let mut nav = FrameNavigator::new(&config());
    nav.on_frame_loaded(&mut ctx).unwrap();
    let before = ctx.current_entry().clone();
    let replaces = ctx.replace_count();

    // A cross-origin document hides its location from the wrapper.
    ctx.load(FrameDocument::unreadable());

    assert_eq!(nav.on_frame_loaded(&mut ctx), None);
    assert_eq!(ctx.current_entry(), &before);
    assert_eq!(ctx.replace_count(), replaces);
    assert_eq!(
        ctx.element_text("_wb_capture_info").as_deref(),
        Some("Wed, 01 Jan 2020 00:00:00 GMT")
    );
}

#[test]
fn injected_strategy_replaces_history_recording() {
    let mut seen = Vec::new();
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    ctx.load(FrameDocument::at("http://localhost/web/2020mp_/http://a.com/"));

    {
        let strategy = |_: &mut dyn BrowsingContext, snap: &NavigationSnapshot| {
            seen.push(snap.clone());
        };
        let mut nav = FrameNavigator::with_strategy(&config(), strategy);
        nav.on_frame_loaded(&mut ctx);
        nav.on_frame_loaded(&mut ctx);
    }

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].timestamp, "2020");
    assert_eq!(ctx.replace_count(), 0);
    assert_eq!(ctx.current_history_entry(), None);
}

#[test]
fn stateless_history_entries_are_ignored() {
    let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
    let mut nav = FrameNavigator::new(&config());

    assert!(!nav.on_history_navigated(&mut ctx, None));
    assert_eq!(ctx.navigation_target(), None);
    assert_eq!(ctx.element_text("_wb_label").as_deref(), Some(""));
}

#[test]
fn undecodable_raw_payload_counts_as_no_state() {
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    let mut nav = FrameNavigator::new(&config());

    assert!(!nav.on_history_navigated_raw(&mut ctx, Some("{\"not\":\"a state\"}")));
    assert!(!nav.on_history_navigated_raw(&mut ctx, None));
    assert_eq!(ctx.navigation_target(), None);
}

#[test]
fn raw_payload_restores_like_a_typed_one() {
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    let mut nav = FrameNavigator::new(&config());
    let state = nav
        .history()
        .record_state(&mut ctx, "http://a.com/", "2020", "label", false);

    assert!(nav.on_history_navigated_raw(&mut ctx, Some(&state.to_json().unwrap())));
    assert_eq!(ctx.navigation_target().as_deref(), Some("/web/2020/http://a.com/"));
}

#[test]
fn back_forward_loop_keeps_history_stable() {
    let server = ReplayServerFake::new(ORIGIN, "/web/");
    let mut ctx = InMemoryBrowsingContext::new("/web/").with_status_slots();
    let mut nav = FrameNavigator::new(&config());

    // Initial page.
    ctx.set_navigation_target("/web/20200101000000/http://a.com/");
    settle(&mut nav, &mut ctx, &server);

    // The user follows a link inside the wrapper to a second capture.
    ctx.push_entry("/web/20210101000000/http://b.com/");
    ctx.set_navigation_target("/web/20210101000000/http://b.com/");
    settle(&mut nav, &mut ctx, &server);
    let len = ctx.history_len();
    assert_eq!(len, 2);

    for _ in 0..3 {
        let back = ctx.go_back().flatten();
        assert!(nav.on_history_navigated(&mut ctx, back.as_ref()));
        let snap = settle(&mut nav, &mut ctx, &server).unwrap();
        assert_eq!(snap.url, "http://a.com/");
        assert_eq!(ctx.current_entry().url, "/web/20200101000000/http://a.com/");
        assert_eq!(
            ctx.element_text("_wb_capture_info").as_deref(),
            Some("Wed, 01 Jan 2020 00:00:00 GMT")
        );

        let forward = ctx.go_forward().flatten();
        assert!(nav.on_history_navigated(&mut ctx, forward.as_ref()));
        let snap = settle(&mut nav, &mut ctx, &server).unwrap();
        assert_eq!(snap.url, "http://b.com/");
        assert_eq!(snap.timestamp, "20210101000000");

        assert_eq!(ctx.history_len(), len);
    }
}

#[test]
fn loop_without_injected_config_uses_url_fallback() {
    let server = ReplayServerFake::new(ORIGIN, "/web/").without_config();
    let mut ctx = InMemoryBrowsingContext::new("/web/");
    let mut nav = FrameNavigator::new(&config());

    ctx.set_navigation_target("/web/19961231235959/http://old.com/");
    let snap = settle(&mut nav, &mut ctx, &server).unwrap();
    let recorded = ctx.current_history_entry().unwrap();

    assert_eq!(snap.capture_label, "Tue, 31 Dec 1996 23:59:59 GMT");
    assert_eq!(recorded.inner_url(), "/web/19961231235959mp_/http://old.com/");

    nav.on_history_navigated(&mut ctx, Some(&recorded));
    settle(&mut nav, &mut ctx, &server);
    assert_eq!(ctx.current_history_entry(), Some(recorded));
    assert_eq!(ctx.history_len(), 1);
}
