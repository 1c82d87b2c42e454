use std::collections::HashSet;

use super::super::domain::ProfileAggregate;

/// Predicate evaluated against a profile snapshot.
pub type RulePredicate = fn(&ProfileAggregate) -> bool;

/// One weighted checklist item contributing to the completion score.
#[derive(Clone, Copy)]
pub struct ChecklistRule {
    pub key: &'static str,
    pub label: &'static str,
    pub points: u32,
    pub route: Option<&'static str>,
    pub predicate: RulePredicate,
}

impl ChecklistRule {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        points: u32,
        route: Option<&'static str>,
        predicate: RulePredicate,
    ) -> Self {
        Self {
            key,
            label,
            points,
            route,
            predicate,
        }
    }

    pub fn is_satisfied_by(&self, profile: &ProfileAggregate) -> bool {
        (self.predicate)(profile)
    }
}

impl std::fmt::Debug for ChecklistRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistRule")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("points", &self.points)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

/// Rule-set validation failures. These are deployment defects caught at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("completion rule set must contain at least one rule")]
    EmptyRuleSet,
    #[error("completion rule '{key}' must be worth more than zero points")]
    ZeroPoints { key: &'static str },
    #[error("completion rule key '{key}' is defined more than once")]
    DuplicateKey { key: &'static str },
    #[error("completion rule weights overflow at rule '{key}'")]
    WeightOverflow { key: &'static str },
}

/// Ordered, validated list of checklist rules.
#[derive(Debug, Clone)]
pub struct CompletionRuleSet {
    rules: Vec<ChecklistRule>,
    total_points: u32,
}

impl CompletionRuleSet {
    pub fn new(rules: Vec<ChecklistRule>) -> Result<Self, ConfigurationError> {
        if rules.is_empty() {
            return Err(ConfigurationError::EmptyRuleSet);
        }

        let mut seen = HashSet::with_capacity(rules.len());
        let mut total_points: u32 = 0;
        for rule in &rules {
            if rule.points == 0 {
                return Err(ConfigurationError::ZeroPoints { key: rule.key });
            }
            if !seen.insert(rule.key) {
                return Err(ConfigurationError::DuplicateKey { key: rule.key });
            }
            total_points = total_points
                .checked_add(rule.points)
                .ok_or(ConfigurationError::WeightOverflow { key: rule.key })?;
        }

        Ok(Self {
            rules,
            total_points,
        })
    }

    /// The ten-item checklist shown on the profile settings screen.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
            total_points: STANDARD_RULES.iter().map(|rule| rule.points).sum(),
        }
    }

    pub fn rules(&self) -> &[ChecklistRule] {
        &self.rules
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn get(&self, key: &str) -> Option<&ChecklistRule> {
        self.rules.iter().find(|rule| rule.key == key)
    }
}

pub const PROFILE_PICTURE: &str = "profilePicture";
pub const FULL_NAME: &str = "fullName";
pub const BIO: &str = "bio";
pub const COMPANY_POSITION: &str = "companyPosition";
pub const CITY: &str = "city";
pub const PHONE_VERIFIED: &str = "phoneVerified";
pub const EMAIL_VERIFIED: &str = "emailVerified";
pub const INTERESTS: &str = "interests";
pub const SOCIAL_LINKS: &str = "socialLinks";
pub const FIRST_CONNECTION: &str = "firstConnection";

pub const MIN_INTERESTS: u32 = 3;

const STANDARD_RULES: [ChecklistRule; 10] = [
    ChecklistRule::new(
        PROFILE_PICTURE,
        "Profile Picture",
        15,
        Some("/settings/profile"),
        |profile| profile.profile_photo_present,
    ),
    ChecklistRule::new(
        FULL_NAME,
        "Full Name",
        10,
        Some("/settings/profile"),
        |profile| !profile.first_name.is_empty() && !profile.last_name.is_empty(),
    ),
    ChecklistRule::new(BIO, "Bio", 10, Some("/settings/profile"), |profile| {
        has_text(profile.bio.as_deref())
    }),
    ChecklistRule::new(
        COMPANY_POSITION,
        "Company + Position",
        10,
        Some("/settings/profile"),
        |profile| profile.company.is_some() && profile.position.is_some(),
    ),
    ChecklistRule::new(CITY, "City", 5, Some("/settings/profile"), |profile| {
        has_text(profile.city.as_deref())
    }),
    ChecklistRule::new(
        PHONE_VERIFIED,
        "Phone Verified",
        10,
        Some("/settings/verification"),
        |profile| profile.phone_verified,
    ),
    ChecklistRule::new(EMAIL_VERIFIED, "Email Verified", 10, None, |profile| {
        profile.email_verified
    }),
    ChecklistRule::new(
        INTERESTS,
        "Interests (min 3)",
        15,
        Some("/settings/interests"),
        |profile| profile.interest_count >= MIN_INTERESTS,
    ),
    ChecklistRule::new(
        SOCIAL_LINKS,
        "Social Links",
        10,
        Some("/settings/social"),
        |profile| profile.has_social_links,
    ),
    ChecklistRule::new(
        FIRST_CONNECTION,
        "First Connection",
        5,
        Some("/network/discover"),
        |profile| profile.has_accepted_connection,
    ),
];

/// Unvalidated copy of the standard checklist, for callers assembling their own set.
pub fn standard_rules() -> Vec<ChecklistRule> {
    STANDARD_RULES.to_vec()
}

fn has_text(value: Option<&str>) -> bool {
    value.map(|text| !text.trim().is_empty()).unwrap_or(false)
}
