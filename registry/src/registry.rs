//! The community registry.

use {
    crate::{
        aggregate::{CommunityAggregate, TierCounts},
        error::RegistryError,
    },
    amplify_catalog::{TierCatalog, TierId},
    log::*,
    serde::{Deserialize, Serialize},
    std::{cmp::Ordering, collections::HashMap},
};

/// A community present at startup, optionally with existing members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySeed {
    pub name: String,
    #[serde(default)]
    pub tier_counts: TierCounts,
}

impl CommunitySeed {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier_counts: TierCounts::default(),
        }
    }
}

/// Registry-wide sums across every community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryTotals {
    pub communities: usize,
    pub member_count: u64,
    pub monthly_total: u64,
}

/// Mapping from community name to its aggregate counters.
///
/// `names` and the keys of `by_name` are always the same set. The default
/// name sits at `names[0]`; the rest are kept sorted case-insensitively with
/// ties broken by the exact string.
#[derive(Debug, Clone)]
pub struct CommunityRegistry {
    catalog: TierCatalog,
    default_name: String,
    names: Vec<String>,
    by_name: HashMap<String, CommunityAggregate>,
}

/// Display order for non-default names.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Trim a user-supplied name and reject blanks.
fn normalize_name(raw: &str) -> Result<&str, RegistryError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RegistryError::InvalidArgument(
            "community name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

impl CommunityRegistry {
    /// A registry holding only the default community.
    pub fn new(catalog: TierCatalog, default_name: &str) -> Result<Self, RegistryError> {
        Self::with_seeds(catalog, default_name, &[])
    }

    /// A registry holding the default community plus `seeds`.
    ///
    /// The default community may itself appear in `seeds` to give it starting
    /// counts. Seed names must be unique.
    pub fn with_seeds(
        catalog: TierCatalog,
        default_name: &str,
        seeds: &[CommunitySeed],
    ) -> Result<Self, RegistryError> {
        let default_name = normalize_name(default_name)?.to_string();
        let mut registry = Self {
            catalog,
            default_name: default_name.clone(),
            names: vec![default_name.clone()],
            by_name: HashMap::new(),
        };
        registry
            .by_name
            .insert(default_name.clone(), CommunityAggregate::empty(default_name));

        let mut seeded_default = false;
        for seed in seeds {
            let name = normalize_name(&seed.name)?;
            let aggregate =
                CommunityAggregate::from_counts(name, seed.tier_counts, &registry.catalog)
                    .ok_or_else(|| RegistryError::Overflow(name.to_string()))?;

            if name == registry.default_name {
                if seeded_default {
                    return Err(RegistryError::InvalidArgument(format!(
                        "community \"{name}\" is seeded more than once"
                    )));
                }
                seeded_default = true;
                registry.by_name.insert(name.to_string(), aggregate);
                continue;
            }
            if registry.by_name.contains_key(name) {
                return Err(RegistryError::InvalidArgument(format!(
                    "community \"{name}\" is seeded more than once"
                )));
            }
            registry.names.push(name.to_string());
            registry.by_name.insert(name.to_string(), aggregate);
        }
        registry.sort_names();

        debug!(
            "Community registry initialised with {} communities (default \"{}\")",
            registry.names.len(),
            registry.default_name
        );
        Ok(registry)
    }

    /// The community every fresh selection starts from.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Tier prices used for monthly totals.
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Aggregate for `name`.
    pub fn lookup(&self, name: &str) -> Result<&CommunityAggregate, RegistryError> {
        let name = name.trim();
        self.by_name
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name.trim())
    }

    /// Names in display order: default first, then sorted.
    pub fn list_names(&self) -> &[String] {
        &self.names
    }

    /// Existing name equal to `name` ignoring ASCII and Unicode case.
    pub fn find_ignore_case(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
            .map(String::as_str)
    }

    /// Create `name` with zero counters if it does not exist yet.
    ///
    /// Returns `true` when an entry was created. Calling it again with the
    /// same name changes nothing.
    pub fn ensure_exists(&mut self, name: &str) -> Result<bool, RegistryError> {
        let name = normalize_name(name)?;
        if self.by_name.contains_key(name) {
            return Ok(false);
        }
        self.by_name
            .insert(name.to_string(), CommunityAggregate::empty(name));
        self.names.push(name.to_string());
        self.sort_names();
        info!("Created community \"{name}\"");
        Ok(true)
    }

    /// Count one new member of `name` at `tier`.
    ///
    /// `name` must already exist; the registry never creates on write. All
    /// counters are checked before any of them change, so a failed call
    /// leaves the aggregate untouched.
    pub fn record_signup(
        &mut self,
        name: &str,
        tier: TierId,
    ) -> Result<CommunityAggregate, RegistryError> {
        let name = name.trim();
        let price = self.catalog.price(tier);
        let aggregate = self
            .by_name
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        let overflow = || RegistryError::Overflow(name.to_string());
        let member_count = aggregate.member_count.checked_add(1).ok_or_else(overflow)?;
        let tier_count = aggregate
            .tier_counts
            .get(tier)
            .checked_add(1)
            .ok_or_else(overflow)?;
        let monthly_total = aggregate
            .monthly_total
            .checked_add(price)
            .ok_or_else(overflow)?;

        aggregate.member_count = member_count;
        *aggregate.tier_counts.get_mut(tier) = tier_count;
        aggregate.monthly_total = monthly_total;

        info!(
            "Recorded {tier} signup for \"{name}\": members={member_count} monthly_total={monthly_total}"
        );
        Ok(aggregate.clone())
    }

    /// Record a signup where the tier arrives as text.
    pub fn record_signup_named(
        &mut self,
        name: &str,
        tier: &str,
    ) -> Result<CommunityAggregate, RegistryError> {
        let tier = TierId::parse(tier)?;
        self.record_signup(name, tier)
    }

    /// Aggregates in display order.
    pub fn aggregates(&self) -> impl Iterator<Item = &CommunityAggregate> {
        self.names.iter().filter_map(|name| self.by_name.get(name))
    }

    /// Sums across all communities (saturating).
    pub fn totals(&self) -> RegistryTotals {
        self.aggregates().fold(
            RegistryTotals {
                communities: self.names.len(),
                ..RegistryTotals::default()
            },
            |totals, aggregate| RegistryTotals {
                member_count: totals.member_count.saturating_add(aggregate.member_count),
                monthly_total: totals.monthly_total.saturating_add(aggregate.monthly_total),
                ..totals
            },
        )
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true: the default community always exists.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn sort_names(&mut self) {
        if let Some((_default, rest)) = self.names.split_first_mut() {
            rest.sort_by(|a, b| compare_names(a, b));
        }
    }
}
