//! The view router state machine.

use {
    crate::{
        config::RouterConfig,
        location::{Location, Viewport},
        view::{View, TOP_ANCHOR},
    },
    log::*,
};

/// Bidirectional sync between the location fragment and the current view.
///
/// States are the [`View`] variants; every state reaches every other one and
/// none is terminal.
#[derive(Debug)]
pub struct ViewRouter<L, V> {
    config: RouterConfig,
    location: L,
    viewport: V,
    current_view: View,
    /// Anchor to scroll to once the home view has rendered.
    pending_anchor: Option<String>,
}

impl<L: Location, V: Viewport> ViewRouter<L, V> {
    /// Create a router whose initial view is whatever the location already
    /// points at (home for an empty fragment).
    pub fn new(config: RouterConfig, location: L, viewport: V) -> Self {
        let current_view = View::from_fragment(&location.fragment());
        debug!("Router starting at {current_view}");
        Self {
            config,
            location,
            viewport,
            current_view,
            pending_anchor: None,
        }
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn pending_anchor(&self) -> Option<&str> {
        self.pending_anchor.as_deref()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Point the location at `view`. The view itself changes only when the
    /// host reports the location change back through
    /// [`on_location_changed`](Self::on_location_changed).
    pub fn navigate_to(&mut self, view: View) {
        let fragment = view.fragment();
        debug!("Navigating to {view} ({fragment:?})");
        self.location.assign(&fragment);
    }

    /// The single place the current view changes.
    ///
    /// Unknown fragments select home. Every call resets the scroll position
    /// to the top without animation.
    pub fn on_location_changed(&mut self, raw_fragment: &str) -> View {
        let next = View::from_fragment(raw_fragment);
        if next != View::Home && self.pending_anchor.take().is_some() {
            debug!("Dropping pending anchor scroll: left for {next}");
        }
        if next != self.current_view {
            info!("View {} -> {next}", self.current_view);
        }
        self.current_view = next;
        self.viewport.scroll_to_top();
        next
    }

    /// Feed every queued location change into
    /// [`on_location_changed`](Self::on_location_changed). Returns how many
    /// changes were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0usize;
        while let Some(fragment) = self.location.take_change() {
            self.on_location_changed(&fragment);
            applied = applied.saturating_add(1);
        }
        applied
    }

    /// Smooth-scroll to a section of the home view.
    ///
    /// From any other view this navigates home first and defers the scroll
    /// until [`on_rendered`](Self::on_rendered), because the anchor does not
    /// exist until the home view mounts.
    pub fn scroll_to_anchor(&mut self, anchor: &str) {
        if self.current_view == View::Home {
            self.scroll_now(anchor);
            return;
        }
        if anchor != TOP_ANCHOR {
            self.pending_anchor = Some(anchor.to_string());
        }
        self.navigate_to(View::Home);
    }

    /// The presentation layer finished rendering the current view.
    pub fn on_rendered(&mut self) {
        if self.current_view != View::Home {
            return;
        }
        if let Some(anchor) = self.pending_anchor.take() {
            self.scroll_now(&anchor);
        }
    }

    fn scroll_now(&mut self, anchor: &str) {
        if anchor == TOP_ANCHOR {
            self.viewport.smooth_scroll_to(0.0);
            return;
        }
        match self.viewport.anchor_position(anchor) {
            Some(y) => {
                let target = (y - self.config.anchor_offset_px).max(0.0);
                self.viewport.smooth_scroll_to(target);
            }
            None => warn!("Anchor #{anchor} is not mounted; scroll skipped"),
        }
    }
}
