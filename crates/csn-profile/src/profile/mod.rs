//! Profile completion scoring: the checklist, its score, and next-step suggestions.
//!
//! The engine is a pure function of a [`ProfileAggregate`] snapshot. The service loads a
//! fresh snapshot through a [`ProfileRecordReader`] on every call and never writes back.

pub mod completion;
pub mod domain;
pub mod reader;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use completion::{
    ChecklistRule, CompletionEngine, CompletionResult, CompletionRuleSet, ConfigurationError,
    MissingItem, SuggestionGenerator, SuggestionTemplate,
};
pub use domain::{
    ConnectionRecord, ConnectionStatus, InterestAssociation, InterestVisibility,
    ProfileAggregate, SocialLink, UserId, UserRecord,
};
pub use reader::{
    InMemoryProfileStore, ProfileRecordReader, ProfileSeed, RepositoryError, SeedError,
};
pub use router::{completion_router, ChecklistEntryView, ChecklistView};
pub use service::{CompletionServiceError, ProfileCompletionService};
