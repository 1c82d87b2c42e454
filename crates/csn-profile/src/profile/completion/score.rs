use serde::{Deserialize, Serialize};

use super::super::domain::ProfileAggregate;
use super::rules::CompletionRuleSet;

/// Checklist item the profile has not satisfied yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingItem {
    pub key: String,
    pub label: String,
    pub points: u32,
    pub route: Option<String>,
}

/// Partitioned rule results before suggestions are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreBreakdown {
    pub completion_percentage: u8,
    pub total_points: u32,
    pub earned_points: u32,
    pub completed: Vec<String>,
    pub missing: Vec<MissingItem>,
}

/// Evaluates every rule once, in rule-set order, and tallies the score.
///
/// The rule set's total fits in `u32`, so the earned sum cannot overflow.
pub(crate) fn aggregate(profile: &ProfileAggregate, rules: &CompletionRuleSet) -> ScoreBreakdown {
    let mut completed = Vec::new();
    let mut missing = Vec::new();
    let mut earned_points: u32 = 0;

    for rule in rules.rules() {
        if rule.is_satisfied_by(profile) {
            earned_points += rule.points;
            completed.push(rule.key.to_string());
        } else {
            missing.push(MissingItem {
                key: rule.key.to_string(),
                label: rule.label.to_string(),
                points: rule.points,
                route: rule.route.map(str::to_string),
            });
        }
    }

    let total_points = rules.total_points();

    ScoreBreakdown {
        completion_percentage: percentage(earned_points, total_points),
        total_points,
        earned_points,
        completed,
        missing,
    }
}

/// `round(100 * earned / total)` with ties rounded up, in integer arithmetic.
///
/// `total` is non-zero for any validated rule set.
pub(crate) fn percentage(earned: u32, total: u32) -> u8 {
    let earned = u64::from(earned.min(total));
    let total = u64::from(total);
    let rounded = (200 * earned + total) / (2 * total);
    rounded as u8
}
