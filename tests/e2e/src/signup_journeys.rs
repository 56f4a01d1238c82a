//! E2E Test: Signup journeys through the embedded form
//!
//! Verifies the full visitor journey:
//! - Pick a tier from the pricing section → land on checkout
//! - Pick an existing community or create a new one in the picker
//! - The embedded form reports completion → exactly one member is counted
//! - Community dashboards and totals reflect the new member

use {
    amplify_app::AppEvent,
    amplify_catalog::TierId,
    amplify_registry::PickerOption,
    amplify_router::View,
    amplify_signup::SignupStatus,
    amplify_e2e_tests::helpers::*,
    pretty_assertions::assert_eq,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test: Gold signup into an existing community
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_gold_signup_into_teaneck() {
    banner("SIGNUP: Gold tier into Teaneck");
    let mut page = Page::launch();
    let before = page.community("Teaneck");
    assert_eq!(before.member_count, 0);

    page.choose_tier(TierId::Gold);
    assert_eq!(page.view(), View::Checkout);

    let option = page.pick_community("tean");
    assert_eq!(option, PickerOption::Existing("Teaneck".to_string()));
    page.form_completed();

    let teaneck = page.community("Teaneck");
    assert_eq!(teaneck.member_count, 1);
    assert_eq!(teaneck.monthly_total, 500);
    assert_eq!(teaneck.tier_counts.get(TierId::Gold), 1);
    assert_eq!(page.community("General Circle").member_count, 0);

    let snapshot = page.snapshot();
    assert_eq!(snapshot.status, SignupStatus::Complete);
    assert_eq!(snapshot.summary.community.as_deref(), Some("Teaneck"));
    println!("✓ Teaneck: {} member, ${}/mo", teaneck.member_count, teaneck.monthly_total);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Silver signup into a community created at checkout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_silver_signup_creates_austin() {
    banner("SIGNUP: Silver tier into a new community");
    let mut page = Page::launch();
    assert!(page.app.registry().lookup("Austin").is_err());

    page.choose_tier(TierId::Silver);
    let option = page.pick_community("  Austin ");
    assert_eq!(option, PickerOption::Create("Austin".to_string()));
    assert_eq!(page.community("Austin").member_count, 0);

    let names = page.app.registry().list_names().to_vec();
    assert_eq!(names[0], "General Circle");
    assert_eq!(names[2], "Austin");

    page.form_completed();
    let austin = page.community("Austin");
    assert_eq!(austin.member_count, 1);
    assert_eq!(austin.monthly_total, 250);
    assert_eq!(austin.tier_counts.get(TierId::Silver), 1);
    println!("✓ Austin created and counted");
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Default community needs no picker interaction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_default_community_signup() {
    banner("SIGNUP: Diamond tier into the default community");
    let mut page = Page::launch();
    page.choose_tier(TierId::Diamond);

    let summary = page.snapshot().summary;
    assert_eq!(summary.monthly_price, 1_000);
    assert_eq!(summary.headline_prize, "$100,000");
    assert_eq!(summary.community, None);

    page.form_completed();
    let totals = page.snapshot().totals;
    assert_eq!(totals.member_count, 1);
    assert_eq!(totals.monthly_total, 1_000);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Changing the tier at checkout counts the final choice
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tier_switch_at_checkout() {
    banner("SIGNUP: Switching tiers before completion");
    let mut page = Page::launch();
    page.choose_tier(TierId::Silver);
    page.send(AppEvent::SelectTier(TierId::Diamond));
    page.send(AppEvent::SelectTier(TierId::Gold));
    page.form_completed();

    let default = page.community("General Circle");
    assert_eq!(default.tier_counts.get(TierId::Gold), 1);
    assert_eq!(default.tier_counts.get(TierId::Silver), 0);
    assert_eq!(default.monthly_total, 500);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Two visitors' worth of signups in one session
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_second_signup_after_start_over() {
    banner("SIGNUP: Start over and sign up again");
    let mut page = Page::launch();

    page.choose_tier(TierId::Gold);
    page.pick_community("Miami");
    page.form_completed();

    page.send(AppEvent::StartOver);
    assert_eq!(page.view(), View::Home);

    page.choose_tier(TierId::Diamond);
    assert_eq!(page.snapshot().selection.selected_community_name, "General Circle");
    page.pick_community("Miami");
    page.form_completed();

    let miami = page.community("Miami");
    assert_eq!(miami.member_count, 2);
    assert_eq!(miami.monthly_total, 1_500);
    assert!(miami.is_consistent(page.app.registry().catalog()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Joining from the community dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_join_from_community_dashboard() {
    banner("SIGNUP: Join from a community dashboard");
    let mut page = Page::launch();
    page.send(AppEvent::ToggleCommunity("Lakewood".to_string()));
    assert_eq!(
        page.snapshot().active_community.map(|c| c.name),
        Some("Lakewood".to_string())
    );

    page.send(AppEvent::JoinCommunity("Lakewood".to_string()));
    assert_eq!(page.scroll_y(), anchor_target("tiers"));
    assert_eq!(page.snapshot().active_community, None);

    page.choose_tier(TierId::Silver);
    assert_eq!(page.snapshot().summary.community.as_deref(), Some("Lakewood"));
    page.send(AppEvent::SimulateSuccess);
    assert_eq!(page.community("Lakewood").member_count, 1);
}
