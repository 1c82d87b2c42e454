use std::sync::Arc;

use tracing::{debug, warn};

use super::completion::{CompletionEngine, CompletionResult};
use super::domain::UserId;
use super::reader::{ProfileRecordReader, RepositoryError};

/// Service composing the profile reader with the completion engine.
pub struct ProfileCompletionService<R> {
    reader: Arc<R>,
    engine: Arc<CompletionEngine>,
}

impl<R> ProfileCompletionService<R>
where
    R: ProfileRecordReader + 'static,
{
    pub fn new(reader: Arc<R>, engine: Arc<CompletionEngine>) -> Self {
        Self { reader, engine }
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    /// Load a fresh snapshot for `user_id` and score it.
    pub fn compute_completion(
        &self,
        user_id: &UserId,
    ) -> Result<CompletionResult, CompletionServiceError> {
        let profile = match self.reader.load_profile_aggregate(user_id) {
            Ok(profile) => profile,
            Err(RepositoryError::Unavailable(reason)) => {
                warn!(%user_id, %reason, "profile store unavailable");
                return Err(RepositoryError::Unavailable(reason).into());
            }
            Err(err) => return Err(err.into()),
        };

        let result = self.engine.evaluate(&profile);
        debug!(
            %user_id,
            completion = result.completion_percentage,
            missing = result.missing.len(),
            "computed profile completion"
        );

        Ok(result)
    }
}

/// Error raised by the completion service.
#[derive(Debug, thiserror::Error)]
pub enum CompletionServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CompletionServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CompletionServiceError::Repository(RepositoryError::NotFound { .. })
        )
    }
}
