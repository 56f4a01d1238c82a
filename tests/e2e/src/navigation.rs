//! E2E Test: Navigation
//!
//! Verifies routing as a visitor experiences it:
//! - Every view is reachable and addressable by fragment
//! - Back/forward move through the same path as clicks
//! - Section links from other views land on the home section after render
//! - The mobile menu closes on navigation

use {
    amplify_app::{AmplifyApp, AmplifyConfig, AppEvent},
    amplify_router::{MemoryLocation, MemoryViewport, View},
    amplify_signup::RecordingOpener,
    amplify_e2e_tests::helpers::*,
    pretty_assertions::assert_eq,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test: Footer links visit every view
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_every_view_is_reachable() {
    banner("NAVIGATION: Visit every view");
    let mut page = Page::launch();
    for view in [
        View::Checkout,
        View::Contact,
        View::Privacy,
        View::Terms,
        View::Rules,
        View::Referral,
        View::Home,
    ] {
        page.send(AppEvent::Navigate(view));
        assert_eq!(page.view(), view);
        assert_eq!(page.snapshot().fragment, view.fragment());
        assert_eq!(page.scroll_y(), 0.0);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Deep link opens the right view
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_deep_link() {
    banner("NAVIGATION: Deep link to rules");
    init_logging();
    let app = AmplifyApp::new(
        AmplifyConfig::default(),
        MemoryLocation::new("#rules"),
        MemoryViewport::new(),
        RecordingOpener::new(),
    )
    .unwrap();
    assert_eq!(app.current_view(), View::Rules);

    let app = AmplifyApp::new(
        AmplifyConfig::default(),
        MemoryLocation::new("#does-not-exist"),
        MemoryViewport::new(),
        RecordingOpener::new(),
    )
    .unwrap();
    assert_eq!(app.current_view(), View::Home);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: History buttons
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_back_and_forward() {
    banner("NAVIGATION: Back and forward");
    let mut page = Page::launch();
    page.send(AppEvent::Navigate(View::Terms));
    page.send(AppEvent::Navigate(View::Privacy));

    page.back();
    assert_eq!(page.view(), View::Terms);
    page.back();
    assert_eq!(page.view(), View::Home);
    page.forward();
    assert_eq!(page.view(), View::Terms);
    assert_eq!(page.scroll_y(), 0.0);
}

#[test]
fn test_typed_fragment() {
    banner("NAVIGATION: Visitor edits the address bar");
    let mut page = Page::launch();
    page.app.location_mut().type_fragment("#/REFERRAL?ref=abc");
    assert_eq!(page.app.pump(), 1);
    assert_eq!(page.view(), View::Referral);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Section links
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_section_link_from_legal_page() {
    banner("NAVIGATION: FAQ link from the terms page");
    let mut page = Page::launch();
    page.send(AppEvent::Navigate(View::Terms));
    page.send(AppEvent::ScrollToAnchor("faq".to_string()));

    assert_eq!(page.view(), View::Home);
    assert_eq!(page.scroll_y(), anchor_target("faq"));
    assert_eq!(page.app.router().pending_anchor(), None);
}

#[test]
fn test_section_link_on_home() {
    banner("NAVIGATION: Section link on home");
    let mut page = Page::launch();
    page.send(AppEvent::ScrollToAnchor("how".to_string()));
    assert_eq!(page.scroll_y(), anchor_target("how"));
    page.send(AppEvent::ScrollToAnchor("top".to_string()));
    assert_eq!(page.scroll_y(), 0.0);
}

#[test]
fn test_logo_from_checkout_goes_home_at_top() {
    banner("NAVIGATION: Logo click from checkout");
    let mut page = Page::launch();
    page.send(AppEvent::Navigate(View::Checkout));
    page.send(AppEvent::ScrollToAnchor("top".to_string()));
    assert_eq!(page.view(), View::Home);
    assert_eq!(page.scroll_y(), 0.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Mobile menu
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mobile_menu_closes_on_navigation() {
    banner("NAVIGATION: Mobile menu");
    let mut page = Page::launch();
    page.send(AppEvent::OpenMenu);
    assert!(page.snapshot().menu_open);
    page.send(AppEvent::ScrollToAnchor("tiers".to_string()));
    assert!(!page.snapshot().menu_open);

    page.send(AppEvent::OpenMenu);
    page.send(AppEvent::Navigate(View::Contact));
    assert!(!page.snapshot().menu_open);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Subscribers re-render on every change
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_subscriber_tracks_views() {
    banner("NAVIGATION: Subscriber snapshots");
    let mut page = Page::launch();
    let before = page.renders();
    page.send(AppEvent::Navigate(View::Contact));
    assert!(page.renders() > before);
    assert_eq!(page.last_delivered().map(|s| s.view), Some(View::Contact));
}
