//! FAQ entries.
//!
//! The landing page shows the primary questions up front and reveals the
//! secondary ones behind a "see all questions" toggle.

use serde::{Deserialize, Serialize};

/// Which list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqSection {
    Primary,
    Secondary,
}

/// Stable address of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqKey {
    pub section: FaqSection,
    pub index: usize,
}

impl FaqKey {
    pub const fn primary(index: usize) -> Self {
        Self {
            section: FaqSection::Primary,
            index,
        }
    }

    pub const fn secondary(index: usize) -> Self {
        Self {
            section: FaqSection::Secondary,
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaqCatalog {
    #[serde(default)]
    pub primary: Vec<FaqEntry>,
    #[serde(default)]
    pub secondary: Vec<FaqEntry>,
}

impl FaqCatalog {
    /// Look up an entry by key.
    pub fn get(&self, key: FaqKey) -> Option<&FaqEntry> {
        match key.section {
            FaqSection::Primary => self.primary.get(key.index),
            FaqSection::Secondary => self.secondary.get(key.index),
        }
    }

    /// Entries currently on screen: primary always, secondary only when
    /// `show_all` is set.
    pub fn visible(&self, show_all: bool) -> Vec<(FaqKey, &FaqEntry)> {
        let primary = self
            .primary
            .iter()
            .enumerate()
            .map(|(index, entry)| (FaqKey::primary(index), entry));
        let secondary = self
            .secondary
            .iter()
            .enumerate()
            .filter(|_| show_all)
            .map(|(index, entry)| (FaqKey::secondary(index), entry));
        primary.chain(secondary).collect()
    }

    pub fn len(&self) -> usize {
        self.primary.len().saturating_add(self.secondary.len())
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The launch question set.
    pub fn launch() -> Self {
        let entry = |question: &str, answer: &str| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        Self {
            primary: vec![
                entry(
                    "What is Amplify?",
                    "A community-powered giving platform that pools monthly donations \
                     for greater collective impact.",
                ),
                entry(
                    "Is my contribution tax-deductible?",
                    "Donations benefiting a 501(c)(3) organization are tax-deductible in \
                     the US to the extent permitted by law.",
                ),
                entry(
                    "Who selects the charities?",
                    "Charities are vetted in advance based on impact and financial \
                     transparency.",
                ),
            ],
            secondary: vec![
                entry(
                    "When am I charged?",
                    "Members are only charged once a giving circle is filled.",
                ),
                entry(
                    "Can I cancel at any time?",
                    "Yes. Memberships can be paused or canceled before a scheduled charge.",
                ),
                entry(
                    "Are the drawings required?",
                    "No. Drawings are provided solely as a thank-you for consistent giving.",
                ),
            ],
        }
    }
}
