use {
    amplify_catalog::{FaqKey, TierDefinition},
    amplify_registry::{CommunityAggregate, PickerOption, RegistryTotals},
    amplify_router::View,
    amplify_signup::{AttemptId, CheckoutSummary, SignupSelection, SignupStatus},
    serde::Serialize,
};

/// Everything a renderer needs, handed to subscribers after each event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub view: View,
    pub fragment: String,
    pub menu_open: bool,

    pub tiers: Vec<TierDefinition>,
    pub communities: Vec<CommunityAggregate>,
    pub totals: RegistryTotals,
    pub active_community: Option<CommunityAggregate>,

    pub selection: SignupSelection,
    pub status: SignupStatus,
    pub attempt: AttemptId,
    pub summary: CheckoutSummary,
    pub picker: PickerSnapshot,
    /// `src` of the embedded enrollment form, when it is enabled.
    pub embedded_form_url: Option<String>,
    pub pending_completions: usize,

    pub faq: Vec<FaqItem>,
    pub show_all_faqs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerSnapshot {
    pub query: String,
    pub is_open: bool,
    pub options: Vec<PickerOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub key: FaqKey,
    pub question: String,
    pub answer: String,
    pub open: bool,
}

impl AppSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
