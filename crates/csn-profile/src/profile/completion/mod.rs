mod rules;
mod score;
mod suggestions;

pub use rules::{
    standard_rules, ChecklistRule, CompletionRuleSet, ConfigurationError, RulePredicate, BIO,
    CITY, COMPANY_POSITION, EMAIL_VERIFIED, FIRST_CONNECTION, FULL_NAME, INTERESTS,
    MIN_INTERESTS, PHONE_VERIFIED, PROFILE_PICTURE, SOCIAL_LINKS,
};
pub use score::MissingItem;
pub use suggestions::{SuggestionGenerator, SuggestionTemplate};

use super::domain::ProfileAggregate;
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the checklist and suggestion templates to a profile.
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    rules: CompletionRuleSet,
    suggestions: SuggestionGenerator,
}

impl CompletionEngine {
    pub fn new(rules: CompletionRuleSet, suggestions: SuggestionGenerator) -> Self {
        Self { rules, suggestions }
    }

    pub fn standard() -> Self {
        Self::new(CompletionRuleSet::standard(), SuggestionGenerator::standard())
    }

    pub fn rules(&self) -> &CompletionRuleSet {
        &self.rules
    }

    pub fn evaluate(&self, profile: &ProfileAggregate) -> CompletionResult {
        let breakdown = score::aggregate(profile, &self.rules);
        let suggestions = self.suggestions.suggest(&breakdown.missing);

        CompletionResult {
            completion_percentage: breakdown.completion_percentage,
            total_points: breakdown.total_points,
            earned_points: breakdown.earned_points,
            completed: breakdown.completed,
            missing: breakdown.missing,
            suggestions,
        }
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Completion score with the checklist partition and next-step hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub completion_percentage: u8,
    pub total_points: u32,
    pub earned_points: u32,
    pub completed: Vec<String>,
    pub missing: Vec<MissingItem>,
    pub suggestions: Vec<String>,
}

impl CompletionResult {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_points(&self) -> u32 {
        self.missing.iter().map(|item| item.points).sum()
    }
}
