use {amplify_catalog::CatalogError, thiserror::Error};

/// Errors produced by the community registry.
///
/// None of these are reachable from a correctly wired UI: names are created
/// before they can be selected and tier ids are typed. Callers log them as
/// defects rather than showing them to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Malformed input: an empty community name or an unknown tier id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A write referenced a community that was never created.
    #[error("Community \"{0}\" not found")]
    NotFound(String),

    /// A counter for the community would exceed `u64::MAX`.
    #[error("Counter overflow while recording a signup for \"{0}\"")]
    Overflow(String),
}

impl From<CatalogError> for RegistryError {
    fn from(err: CatalogError) -> Self {
        RegistryError::InvalidArgument(err.to_string())
    }
}
