use {
    amplify_catalog::{TierCatalog, TierId},
    serde::{Deserialize, Serialize},
};

/// Member count per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts {
    #[serde(default)]
    pub silver: u64,
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub diamond: u64,
}

impl TierCounts {
    pub const fn new(silver: u64, gold: u64, diamond: u64) -> Self {
        Self {
            silver,
            gold,
            diamond,
        }
    }

    #[inline]
    pub fn get(&self, id: TierId) -> u64 {
        match id {
            TierId::Silver => self.silver,
            TierId::Gold => self.gold,
            TierId::Diamond => self.diamond,
        }
    }

    pub(crate) fn get_mut(&mut self, id: TierId) -> &mut u64 {
        match id {
            TierId::Silver => &mut self.silver,
            TierId::Gold => &mut self.gold,
            TierId::Diamond => &mut self.diamond,
        }
    }

    /// `(tier, count)` pairs in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (TierId, u64)> + '_ {
        TierId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Sum of all counts, `None` on overflow.
    pub fn total(&self) -> Option<u64> {
        self.iter()
            .try_fold(0u64, |sum, (_, count)| sum.checked_add(count))
    }

    /// Pledge total these counts represent under `catalog`, `None` on overflow.
    pub fn monthly_total(&self, catalog: &TierCatalog) -> Option<u64> {
        self.iter().try_fold(0u64, |sum, (id, count)| {
            count
                .checked_mul(catalog.price(id))
                .and_then(|subtotal| sum.checked_add(subtotal))
        })
    }
}

/// Aggregate counters for one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityAggregate {
    pub name: String,
    pub member_count: u64,
    /// Sum of the monthly price of every joined member's tier.
    pub monthly_total: u64,
    pub tier_counts: TierCounts,
}

impl CommunityAggregate {
    /// A community with no members yet.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_count: 0,
            monthly_total: 0,
            tier_counts: TierCounts::default(),
        }
    }

    /// A community starting from existing per-tier counts. Member count and
    /// monthly total are derived; `None` if either overflows.
    pub fn from_counts(
        name: impl Into<String>,
        tier_counts: TierCounts,
        catalog: &TierCatalog,
    ) -> Option<Self> {
        Some(Self {
            name: name.into(),
            member_count: tier_counts.total()?,
            monthly_total: tier_counts.monthly_total(catalog)?,
            tier_counts,
        })
    }

    /// Whether the counters agree with each other under `catalog`.
    pub fn is_consistent(&self, catalog: &TierCatalog) -> bool {
        self.tier_counts.total() == Some(self.member_count)
            && self.tier_counts.monthly_total(catalog) == Some(self.monthly_total)
    }
}
