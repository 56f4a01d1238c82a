//! Small pieces of page state that live next to the signup flow.

use {
    amplify_catalog::{FaqCatalog, FaqEntry, FaqKey, FaqSection},
    serde::{Deserialize, Serialize},
};

/// FAQ accordion: at most one entry open, secondary entries hidden until
/// "see all questions" is toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPanel {
    open: Option<FaqKey>,
    show_all: bool,
}

impl FaqPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_entry(&self) -> Option<FaqKey> {
        self.open
    }

    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    pub fn is_open(&self, key: FaqKey) -> bool {
        self.open == Some(key)
    }

    /// Open `key`, closing whatever was open, or close it if it already is.
    /// Hidden secondary entries and keys missing from `catalog` cannot be
    /// opened.
    pub fn toggle(&mut self, catalog: &FaqCatalog, key: FaqKey) -> bool {
        if catalog.get(key).is_none() {
            return false;
        }
        if key.section == FaqSection::Secondary && !self.show_all {
            return false;
        }
        self.open = if self.is_open(key) { None } else { Some(key) };
        true
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        if !self.show_all
            && self
                .open
                .is_some_and(|key| key.section == FaqSection::Secondary)
        {
            self.open = None;
        }
    }

    /// Entries currently on screen, with whether each is expanded.
    pub fn visible<'a>(&self, catalog: &'a FaqCatalog) -> Vec<(FaqKey, &'a FaqEntry, bool)> {
        catalog
            .visible(self.show_all)
            .into_iter()
            .map(|(key, entry)| (key, entry, self.is_open(key)))
            .collect()
    }
}

/// Which community's dashboard is expanded in the community section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityBrowser {
    active: Option<String>,
}

impl CommunityBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle(&mut self, name: &str) {
        if self.active.as_deref() == Some(name) {
            self.active = None;
        } else {
            self.active = Some(name.to_string());
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
