//! Application configuration.
//!
//! Every field has a production default, so a config file only needs the
//! values it changes:
//!
//! ```toml
//! default_community = "General Circle"
//! default_tier = "gold"
//!
//! [[communities]]
//! name = "Teaneck"
//! tier_counts = { silver = 3, gold = 1 }
//!
//! [router]
//! anchor_offset_px = 90.0
//!
//! [integration]
//! use_embedded_form = false
//! ```

use {
    amplify_catalog::{FaqCatalog, TierCatalog, TierId},
    amplify_registry::{CommunityRegistry, CommunitySeed, RegistryError},
    amplify_router::{RouterConfig, RouterConfigError},
    amplify_signup::{IntegrationConfig, IntegrationConfigError},
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Community every selection starts from.
pub const DEFAULT_COMMUNITY: &str = "General Circle";

/// Communities listed at launch besides the default one.
pub const LAUNCH_COMMUNITIES: [&str; 6] = [
    "Teaneck",
    "5 Towns",
    "Los Angeles",
    "Miami",
    "Lakewood",
    "Jerusalem",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("default_community must not be empty")]
    EmptyDefaultCommunity,

    #[error("Invalid router config: {0}")]
    Router(#[from] RouterConfigError),

    #[error("Invalid integration config: {0}")]
    Integration(#[from] IntegrationConfigError),

    #[error("Invalid community seeds: {0}")]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmplifyConfig {
    pub default_community: String,

    /// Tier preselected for a fresh attempt. Unset means the cheapest tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tier: Option<TierId>,

    /// Communities present at startup. The default community may appear
    /// here to give it starting counts.
    pub communities: Vec<CommunitySeed>,

    pub tiers: TierCatalog,
    pub faq: FaqCatalog,
    pub router: RouterConfig,
    pub integration: IntegrationConfig,
}

impl Default for AmplifyConfig {
    fn default() -> Self {
        Self {
            default_community: DEFAULT_COMMUNITY.to_string(),
            default_tier: None,
            communities: LAUNCH_COMMUNITIES
                .iter()
                .copied()
                .map(CommunitySeed::new)
                .collect(),
            tiers: TierCatalog::default(),
            faq: FaqCatalog::launch(),
            router: RouterConfig::default(),
            integration: IntegrationConfig::default(),
        }
    }
}

impl AmplifyConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_community.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultCommunity);
        }
        self.router.validate()?;
        self.integration.validate()?;
        self.build_registry()?;
        Ok(())
    }

    pub fn default_tier(&self) -> TierId {
        self.default_tier.unwrap_or_else(|| self.tiers.cheapest())
    }

    /// A fresh registry holding the default community and every seed.
    pub fn build_registry(&self) -> Result<CommunityRegistry, RegistryError> {
        CommunityRegistry::with_seeds(
            self.tiers.clone(),
            &self.default_community,
            &self.communities,
        )
    }
}
