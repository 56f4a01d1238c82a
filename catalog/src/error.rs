use {crate::tier::TierId, thiserror::Error};

/// Errors produced while building or querying the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Text that does not name one of the known tiers.
    #[error("Unknown tier id \"{0}\" (expected silver, gold or diamond)")]
    UnknownTier(String),

    /// The same tier id appears more than once in a catalog definition.
    #[error("Tier {0} is defined more than once")]
    DuplicateTier(TierId),

    /// A catalog definition is missing one of the tiers.
    #[error("Tier {0} has no definition")]
    MissingTier(TierId),

    /// Every tier must cost something per month.
    #[error("Tier {id} must have a positive monthly price")]
    InvalidPrice { id: TierId },
}
