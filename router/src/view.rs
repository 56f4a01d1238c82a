//! The fixed set of page views and their fragment encoding.

use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// Pseudo-anchor meaning "the very top of the page".
pub const TOP_ANCHOR: &str = "top";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum View {
    #[default]
    Home,
    Checkout,
    Contact,
    Privacy,
    Terms,
    Rules,
    Referral,
}

impl View {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Canonical fragment written to the location. Home clears the fragment.
    pub fn fragment(self) -> String {
        match self {
            View::Home => String::new(),
            view => format!("#{}", view.name()),
        }
    }

    /// Parse a raw fragment as delivered by the host.
    ///
    /// Accepts `#checkout`, `checkout`, `#/checkout` and ignores a trailing
    /// `?query`. Anything unrecognised is [`View::Home`].
    pub fn from_fragment(raw: &str) -> View {
        let trimmed = raw.trim();
        let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let path = without_hash.strip_prefix('/').unwrap_or(without_hash);
        let name = path.split('?').next().unwrap_or_default().trim();
        name.parse().unwrap_or_default()
    }
}
