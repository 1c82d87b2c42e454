use super::rules::{BIO, COMPANY_POSITION, FIRST_CONNECTION, INTERESTS, PROFILE_PICTURE};
use super::score::MissingItem;

/// Curated nudge shown when the rule with `key` is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTemplate {
    pub key: &'static str,
    pub message: &'static str,
}

const STANDARD_TEMPLATES: [SuggestionTemplate; 5] = [
    SuggestionTemplate {
        key: PROFILE_PICTURE,
        message: "Add a profile picture to boost trust",
    },
    SuggestionTemplate {
        key: INTERESTS,
        message: "Add at least 3 interests to improve discovery",
    },
    SuggestionTemplate {
        key: BIO,
        message: "Write a bio to help others understand your business",
    },
    SuggestionTemplate {
        key: COMPANY_POSITION,
        message: "Complete your company and position details",
    },
    SuggestionTemplate {
        key: FIRST_CONNECTION,
        message: "Make your first connection to start networking",
    },
];

/// Turns missing checklist items into prioritized hints.
///
/// Output follows template order, not rule order, and never echoes keys
/// that have no template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGenerator {
    templates: Vec<SuggestionTemplate>,
}

impl SuggestionGenerator {
    pub fn new(templates: Vec<SuggestionTemplate>) -> Self {
        Self { templates }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_TEMPLATES.to_vec())
    }

    pub fn templates(&self) -> &[SuggestionTemplate] {
        &self.templates
    }

    pub fn suggest(&self, missing: &[MissingItem]) -> Vec<String> {
        self.templates
            .iter()
            .filter(|template| missing.iter().any(|item| item.key == template.key))
            .map(|template| template.message.to_string())
            .collect()
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
