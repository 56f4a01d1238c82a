//! E2E Test: Payment redirect path
//!
//! Verifies the timer-driven completion used when the embedded form is
//! disabled:
//! - Submitting opens the payment page once and schedules a completion
//! - The completion fires after the configured delay
//! - Abandoning checkout before it fires makes the completion stale

use {
    amplify_app::AppEvent,
    amplify_catalog::TierId,
    amplify_router::View,
    amplify_signup::SignupStatus,
    amplify_e2e_tests::helpers::*,
    pretty_assertions::assert_eq,
    std::time::Duration,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test: Completion fires after the delay
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_redirect_completes_after_delay() {
    banner("PAYMENT: Redirect completes after the delay");
    let mut page = Page::with_payment_redirect();
    assert_eq!(page.snapshot().embedded_form_url, None);

    page.choose_tier(TierId::Gold);
    page.pick_community("5 Towns");
    page.send(AppEvent::Submit);

    let opened = page.app.opener().opened().to_vec();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].host_str(), Some("buy.stripe.com"));
    assert_eq!(page.snapshot().status, SignupStatus::Submitting);
    assert_eq!(page.snapshot().pending_completions, 1);

    assert_eq!(page.wait(COMPLETION_DELAY - Duration::from_millis(1)), 0);
    assert_eq!(page.community("5 Towns").member_count, 0);
    assert_eq!(page.wait(Duration::from_millis(1)), 1);

    let towns = page.community("5 Towns");
    assert_eq!(towns.member_count, 1);
    assert_eq!(towns.monthly_total, 500);
    assert_eq!(page.snapshot().status, SignupStatus::Complete);
    println!("✓ Completion fired at {:?}", page.app.clock());
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Double clicks do not double count
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_double_submit_counts_once() {
    banner("PAYMENT: Double submit");
    let mut page = Page::with_payment_redirect();
    page.choose_tier(TierId::Silver);
    page.send(AppEvent::Submit);
    page.send(AppEvent::Submit);
    page.send(AppEvent::Submit);

    assert_eq!(page.app.opener().opened().len(), 1);
    assert_eq!(page.snapshot().pending_completions, 1);
    page.wait(Duration::from_secs(10));
    assert_eq!(page.snapshot().totals.member_count, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Leaving checkout abandons the attempt
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abandoned_attempt_never_counts() {
    banner("PAYMENT: Abandon checkout before completion");
    let mut page = Page::with_payment_redirect();
    page.choose_tier(TierId::Diamond);
    page.pick_community("Jerusalem");
    page.send(AppEvent::Submit);

    page.send(AppEvent::Navigate(View::Privacy));
    assert_eq!(page.snapshot().status, SignupStatus::Idle);

    assert_eq!(page.wait(COMPLETION_DELAY), 1);
    assert_eq!(page.community("Jerusalem").member_count, 0);
    assert_eq!(page.snapshot().totals.member_count, 0);

    // A fresh attempt afterwards still works.
    page.choose_tier(TierId::Gold);
    page.send(AppEvent::Submit);
    page.wait(COMPLETION_DELAY);
    assert_eq!(page.community("General Circle").member_count, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test: Simulated success beats the timer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_simulated_success_then_timer_is_duplicate() {
    banner("PAYMENT: Simulated success before the timer");
    let mut page = Page::with_payment_redirect();
    page.choose_tier(TierId::Gold);
    page.send(AppEvent::Submit);
    page.send(AppEvent::SimulateSuccess);
    assert_eq!(page.snapshot().status, SignupStatus::Complete);

    page.wait(COMPLETION_DELAY);
    assert_eq!(page.snapshot().totals.member_count, 1);
    assert_eq!(page.snapshot().totals.monthly_total, 500);
}
