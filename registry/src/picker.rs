//! Searchable, creatable community dropdown used at checkout.
//!
//! Typing filters the known communities. When the query names no existing
//! community, a trailing "create" option lets the user add it. The picker
//! never writes to the registry itself: the chosen name is handed to the
//! signup controller, which creates the entry as part of selecting it.

use {
    crate::registry::CommunityRegistry,
    serde::{Deserialize, Serialize},
};

/// One row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum PickerOption {
    Existing(String),
    Create(String),
}

impl PickerOption {
    pub fn name(&self) -> &str {
        match self {
            PickerOption::Existing(name) | PickerOption::Create(name) => name,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, PickerOption::Create(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityPicker {
    query: String,
    is_open: bool,
}

impl CommunityPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the dropdown and forget the query.
    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
    }

    /// Replace the search text; typing opens the dropdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.is_open = true;
    }

    /// Rows for the current query, in registry display order.
    pub fn options(&self, registry: &CommunityRegistry) -> Vec<PickerOption> {
        let trimmed = self.query.trim();
        let needle = trimmed.to_lowercase();
        let mut options: Vec<PickerOption> = registry
            .list_names()
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|name| PickerOption::Existing(name.clone()))
            .collect();

        if !trimmed.is_empty() && registry.find_ignore_case(trimmed).is_none() {
            options.push(PickerOption::Create(trimmed.to_string()));
        }
        options
    }

    /// Accept `option`: closes the dropdown and returns the name to select.
    pub fn choose(&mut self, option: &PickerOption) -> String {
        let name = option.name().to_string();
        self.close();
        name
    }
}
