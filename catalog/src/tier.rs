//! Pledge tiers.
//!
//! Each tier carries a monthly price, a headline prize, a combined-odds label
//! and the list of secondary prizes and perks shown on the pricing table.
//! Prizes and odds are display strings, never computed values.

use {
    crate::error::CatalogError,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// Identifier of a pledge tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TierId {
    Silver,
    Gold,
    Diamond,
}

impl TierId {
    /// All tiers, cheapest first.
    pub const ALL: [TierId; 3] = [TierId::Silver, TierId::Gold, TierId::Diamond];

    /// Parse a tier id from untyped text (surrounding whitespace ignored).
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        raw.trim()
            .parse::<TierId>()
            .map_err(|_| CatalogError::UnknownTier(raw.to_string()))
    }

    /// Position of this tier in [`TierId::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TierId::Silver => 0,
            TierId::Gold => 1,
            TierId::Diamond => 2,
        }
    }

    /// The lowercase wire name (`"silver"`, `"gold"`, `"diamond"`).
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Static definition of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub id: TierId,
    /// Monthly pledge in whole currency units.
    pub monthly_price: u64,
    /// Grand prize label, e.g. `"$50,000"`.
    pub headline_prize: String,
    /// Combined odds label, e.g. `"1 / 50"`.
    pub combined_odds: String,
    /// Secondary prize labels in display order.
    pub secondary_prizes: Vec<String>,
    /// Member perks in display order.
    #[serde(default)]
    pub perks: Vec<String>,
}

impl TierDefinition {
    fn new(
        id: TierId,
        monthly_price: u64,
        headline_prize: &str,
        combined_odds: &str,
        secondary_prizes: &[&str],
        perks: &[&str],
    ) -> Self {
        Self {
            id,
            monthly_price,
            headline_prize: headline_prize.to_string(),
            combined_odds: combined_odds.to_string(),
            secondary_prizes: secondary_prizes.iter().map(|p| p.to_string()).collect(),
            perks: perks.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The validated, immutable set of tier definitions.
///
/// Holds exactly one [`TierDefinition`] per [`TierId`], stored in
/// [`TierId::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierDefinition>", into = "Vec<TierDefinition>")]
pub struct TierCatalog {
    tiers: Vec<TierDefinition>,
}

impl TierCatalog {
    /// Build a catalog from a list of definitions in any order.
    pub fn new(definitions: Vec<TierDefinition>) -> Result<Self, CatalogError> {
        let mut slots: [Option<TierDefinition>; 3] = [None, None, None];
        for definition in definitions {
            if definition.monthly_price == 0 {
                return Err(CatalogError::InvalidPrice { id: definition.id });
            }
            let slot = &mut slots[definition.id.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateTier(definition.id));
            }
            *slot = Some(definition);
        }

        let mut tiers = Vec::with_capacity(TierId::ALL.len());
        for (id, slot) in TierId::ALL.into_iter().zip(slots) {
            tiers.push(slot.ok_or(CatalogError::MissingTier(id))?);
        }
        Ok(Self { tiers })
    }

    /// Definition for `id`.
    #[inline]
    pub fn get(&self, id: TierId) -> &TierDefinition {
        &self.tiers[id.index()]
    }

    /// Monthly price for `id`.
    #[inline]
    pub fn price(&self, id: TierId) -> u64 {
        self.get(id).monthly_price
    }

    /// Definitions in display order (cheapest first).
    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }

    /// The cheapest tier; the lowest-friction default for a new signup.
    pub fn cheapest(&self) -> TierId {
        self.tiers
            .iter()
            .min_by_key(|definition| (definition.monthly_price, definition.id))
            .map(|definition| definition.id)
            .unwrap_or(TierId::Silver)
    }
}

impl TryFrom<Vec<TierDefinition>> for TierCatalog {
    type Error = CatalogError;

    fn try_from(definitions: Vec<TierDefinition>) -> Result<Self, Self::Error> {
        Self::new(definitions)
    }
}

impl From<TierCatalog> for Vec<TierDefinition> {
    fn from(catalog: TierCatalog) -> Self {
        catalog.tiers
    }
}

impl Default for TierCatalog {
    /// The launch pricing table.
    fn default() -> Self {
        Self {
            tiers: vec![
                TierDefinition::new(
                    TierId::Silver,
                    250,
                    "$20,000",
                    "1 / 100",
                    &["1 × $1,250", "2 × $750"],
                    &["Impact Reports", "Member Events"],
                ),
                TierDefinition::new(
                    TierId::Gold,
                    500,
                    "$50,000",
                    "1 / 50",
                    &["1 × $2,500", "6 × $1,000"],
                    &["Impact Reports", "Member Events", "Impact Book"],
                ),
                TierDefinition::new(
                    TierId::Diamond,
                    1_000,
                    "$100,000",
                    "1 / 25",
                    &["1 × $5,000", "2 × $3,000", "12 × $2,000"],
                    &[
                        "Impact Reports",
                        "VIP Event Access",
                        "Seasonal Gifts",
                        "Founder Plaque",
                    ],
                ),
            ],
        }
    }
}
