//! Seams between the router and its host environment.
//!
//! [`Location`] is the fragment the router reads and writes, and [`Viewport`]
//! is the scrollable page. Browser hosts implement them over the window;
//! [`MemoryLocation`] and [`MemoryViewport`] are headless implementations
//! with history and a scroll log, used by tests and server-side snapshots.

use {
    log::*,
    serde::{Deserialize, Serialize},
    std::collections::{HashMap, VecDeque},
};

/// The external "current location" string.
pub trait Location {
    /// Current fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;

    /// Point the location at `fragment`. The resulting change notification
    /// is delivered later, never synchronously.
    fn assign(&mut self, fragment: &str);

    /// Next change notification the host has queued, if it queues them.
    /// Event-driven hosts deliver changes directly and keep the default.
    fn take_change(&mut self) -> Option<String> {
        None
    }
}

/// The scrollable page.
pub trait Viewport {
    /// Jump to the top without animation.
    fn scroll_to_top(&mut self);

    /// Animate to absolute document offset `y`.
    fn smooth_scroll_to(&mut self, y: f64);

    /// Absolute document offset of the element with id `anchor`, if it is
    /// currently mounted.
    fn anchor_position(&self, anchor: &str) -> Option<f64>;
}

impl<T: Location + ?Sized> Location for Box<T> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn assign(&mut self, fragment: &str) {
        (**self).assign(fragment)
    }

    fn take_change(&mut self) -> Option<String> {
        (**self).take_change()
    }
}

impl<T: Viewport + ?Sized> Viewport for Box<T> {
    fn scroll_to_top(&mut self) {
        (**self).scroll_to_top()
    }

    fn smooth_scroll_to(&mut self, y: f64) {
        (**self).smooth_scroll_to(y)
    }

    fn anchor_position(&self, anchor: &str) -> Option<f64> {
        (**self).anchor_position(anchor)
    }
}

// ---------------------------------------------------------------------------
// In-memory location with history
// ---------------------------------------------------------------------------

/// Session history of fragments with back/forward, queuing a change
/// notification for every move the way `hashchange` does.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    cursor: usize,
    changes: VecDeque<String>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    /// Start at `fragment` with no queued changes.
    pub fn new(fragment: &str) -> Self {
        Self {
            entries: vec![fragment.to_string()],
            cursor: 0,
            changes: VecDeque::new(),
        }
    }

    fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Step back one history entry. Returns `false` at the start.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.cursor.checked_sub(1) else {
            return false;
        };
        self.cursor = previous;
        let fragment = self.current().to_string();
        self.changes.push_back(fragment);
        true
    }

    /// Step forward one history entry. Returns `false` at the end.
    pub fn forward(&mut self) -> bool {
        let next = self.cursor.saturating_add(1);
        if next >= self.entries.len() {
            return false;
        }
        self.cursor = next;
        let fragment = self.current().to_string();
        self.changes.push_back(fragment);
        true
    }

    /// Simulate the user editing the address bar.
    pub fn type_fragment(&mut self, fragment: &str) {
        self.assign(fragment);
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.current().to_string()
    }

    fn assign(&mut self, fragment: &str) {
        // Assigning the current fragment fires no change.
        if self.current() == fragment {
            return;
        }
        self.entries.truncate(self.cursor.saturating_add(1));
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len().saturating_sub(1);
        self.changes.push_back(fragment.to_string());
    }

    fn take_change(&mut self) -> Option<String> {
        self.changes.pop_front()
    }
}

// ---------------------------------------------------------------------------
// In-memory viewport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollCommand {
    Top,
    Smooth(f64),
}

/// Records every scroll request and answers anchor lookups from a table of
/// mounted anchors.
#[derive(Debug, Clone, Default)]
pub struct MemoryViewport {
    scroll_y: f64,
    anchors: HashMap<String, f64>,
    commands: Vec<ScrollCommand>,
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount anchors at the given document offsets.
    pub fn mount_anchors<'a>(&mut self, anchors: impl IntoIterator<Item = (&'a str, f64)>) {
        for (id, y) in anchors {
            self.anchors.insert(id.to_string(), y);
        }
    }

    /// Unmount every anchor (the home view went away).
    pub fn unmount_anchors(&mut self) {
        self.anchors.clear();
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }
}

impl Viewport for MemoryViewport {
    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
        self.commands.push(ScrollCommand::Top);
    }

    fn smooth_scroll_to(&mut self, y: f64) {
        trace!("smooth scroll to {y}");
        self.scroll_y = y;
        self.commands.push(ScrollCommand::Smooth(y));
    }

    fn anchor_position(&self, anchor: &str) -> Option<f64> {
        self.anchors.get(anchor).copied()
    }
}
