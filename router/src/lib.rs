//! # Amplify View Router
//!
//! Keeps the page's current view in sync with the location fragment
//! (`#checkout`, `#privacy`, ...).
//!
//! There is exactly one code path that changes the current view:
//! [`ViewRouter::on_location_changed`]. Programmatic navigation only writes
//! the fragment; the host then reports the change back, exactly as it does
//! for the browser's back and forward buttons. Both kinds of navigation
//! therefore go through the same parser and can never disagree.
//!
//! ```text
//!  navigate_to(view) ──► Location::assign("#view")
//!                               │
//!        back / forward ───────►│  (host observes the change)
//!                               ▼
//!              on_location_changed(raw) ──► current_view, scroll to top
//! ```
//!
//! Anchor scrolling from another view is two-step: navigate home, wait for
//! the home view to render ([`ViewRouter::on_rendered`]), then smooth-scroll
//! to the anchor minus the sticky-header offset.

pub mod config;
pub mod location;
pub mod router;
pub mod view;


pub use config::{RouterConfig, RouterConfigError};
pub use location::{Location, MemoryLocation, MemoryViewport, ScrollCommand, Viewport};
pub use router::ViewRouter;
pub use view::{View, TOP_ANCHOR};
