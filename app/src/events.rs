//! Inputs accepted by [`AmplifyApp::dispatch`](crate::AmplifyApp::dispatch).

use {
    amplify_catalog::{FaqKey, TierId},
    amplify_registry::PickerOption,
    amplify_router::View,
    amplify_signup::{MessageError, SignupError},
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// One user or host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AppEvent {
    // Navigation
    Navigate(View),
    /// The host observed a location change (event-driven hosts).
    LocationChanged(String),
    ScrollToAnchor(String),
    /// The current view finished rendering.
    Rendered,

    // Tier and community selection
    /// "Select" on a pricing card: starts checkout with this tier.
    ChooseTier(TierId),
    /// Tier switch on the checkout page.
    SelectTier(TierId),
    SelectCommunity(String),
    OpenPicker,
    ClosePicker,
    PickerQuery(String),
    PickerChoose(PickerOption),

    // Submission
    Submit,
    FormMessage { origin: String, payload: String },
    SimulateSuccess,
    /// "Back to site" after a finished or abandoned attempt.
    StartOver,

    // Page panels
    ToggleFaq(FaqKey),
    ToggleAllFaqs,
    ToggleCommunity(String),
    CloseCommunity,
    /// "Join community" from a community dashboard.
    JoinCommunity(String),
    OpenMenu,
    CloseMenu,
}

/// A dispatched event that could not be applied. Subscribers are still
/// notified and the app stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Signup(#[from] SignupError),

    #[error("Rejected form message: {0}")]
    Message(#[from] MessageError),
}
