//! # Amplify Catalog
//!
//! Static content the rest of the workspace reads from: the three pledge
//! tiers (silver, gold, diamond) and the FAQ entries shown on the landing
//! page.
//!
//! The tier catalog is validated once at construction (exactly one
//! definition per [`TierId`], positive prices) and is immutable afterwards,
//! so lookups by id are infallible.
//!
//! ## Quick start
//!
//! ```rust
//! use amplify_catalog::{TierCatalog, TierId};
//!
//! let catalog = TierCatalog::default();
//! assert_eq!(catalog.get(TierId::Gold).monthly_price, 500);
//!
//! // Tier ids arriving as text (markup attributes, config files) are parsed
//! // case-insensitively.
//! assert_eq!(TierId::parse("Diamond").unwrap(), TierId::Diamond);
//! assert!(TierId::parse("platinum").is_err());
//! ```

pub mod error;
pub mod faq;
pub mod tier;


// Re-exports for convenience.
pub use error::CatalogError;
pub use faq::{FaqCatalog, FaqEntry, FaqKey, FaqSection};
pub use tier::{TierCatalog, TierDefinition, TierId};
