//! Router configuration.

use serde::{Deserialize, Serialize};

/// Height of the sticky header (banner plus nav) in pixels. Anchor scrolls
/// stop this far above the target so the header does not cover it.
pub const DEFAULT_ANCHOR_OFFSET_PX: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub anchor_offset_px: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
        }
    }
}

impl RouterConfig {
    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if !self.anchor_offset_px.is_finite() || self.anchor_offset_px < 0.0 {
            return Err(RouterConfigError::InvalidAnchorOffset(self.anchor_offset_px));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterConfigError {
    #[error("anchor_offset_px must be a finite, non-negative number, got {0}")]
    InvalidAnchorOffset(f64),
}
