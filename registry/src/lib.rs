//! # Amplify Community Registry
//!
//! Single source of truth for the per-community counters shown in the
//! community browser: member count, monthly pledge total and per-tier
//! member counts.
//!
//! Every aggregate satisfies
//!
//! ```text
//! member_count  == silver + gold + diamond
//! monthly_total == Σ tier_counts[t] × price[t]
//! ```
//!
//! The registry only grows. Names are created at startup from a seed list or
//! lazily when a user confirms a new community at checkout, and the only
//! mutation of an existing entry is [`CommunityRegistry::record_signup`].
//!
//! ```rust
//! use amplify_catalog::{TierCatalog, TierId};
//! use amplify_registry::CommunityRegistry;
//!
//! let mut registry = CommunityRegistry::new(TierCatalog::default(), "General Circle").unwrap();
//! registry.ensure_exists("Teaneck").unwrap();
//! let teaneck = registry.record_signup("Teaneck", TierId::Gold).unwrap();
//! assert_eq!(teaneck.member_count, 1);
//! assert_eq!(teaneck.monthly_total, 500);
//! assert_eq!(registry.list_names()[0], "General Circle");
//! ```

pub mod aggregate;
pub mod error;
pub mod picker;
pub mod registry;


pub use aggregate::{CommunityAggregate, TierCounts};
pub use error::RegistryError;
pub use picker::{CommunityPicker, PickerOption};
pub use registry::{CommunityRegistry, CommunitySeed, RegistryTotals};
