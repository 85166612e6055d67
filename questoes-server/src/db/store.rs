//! Store trait shared by the Postgres and in-memory backends

use async_trait::async_trait;

use crate::models::{NewQuestion, Question, QuestionId, QuestionPatch};

/// Failure reported by a question store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the `questoes` table (testable)
///
/// Lookups by id return `Ok(None)` when no row matches; only backend
/// failures are errors.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Liveness probe, `SELECT 1` on Postgres
    async fn ping(&self) -> Result<(), StoreError>;

    /// Every row, in whatever order the backend yields them
    async fn list(&self) -> Result<Vec<Question>, StoreError>;

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Insert and return the row with its assigned id
    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Merge `patch` over the stored row in one step and return the result
    async fn update(
        &self,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError>;

    /// Remove the row and return it as it was just before removal
    async fn delete(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;
}
