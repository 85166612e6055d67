//! Store doubles for handler tests

use async_trait::async_trait;

use super::store::{QuestionStore, StoreError};
use crate::models::{NewQuestion, Question, QuestionId, QuestionPatch};

pub const BROKEN_REASON: &str = "connection refused";

/// Store whose every call fails
pub struct BrokenStore;

fn broken() -> StoreError {
    StoreError::Unavailable(BROKEN_REASON.into())
}

#[async_trait]
impl QuestionStore for BrokenStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(broken())
    }

    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    async fn get(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(broken())
    }

    async fn create(&self, _question: NewQuestion) -> Result<Question, StoreError> {
        Err(broken())
    }

    async fn update(
        &self,
        _id: QuestionId,
        _patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        Err(broken())
    }

    async fn delete(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(broken())
    }
}

/// Store whose calls never complete
pub struct StalledStore;

#[async_trait]
impl QuestionStore for StalledStore {
    async fn ping(&self) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        std::future::pending().await
    }

    async fn get(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        std::future::pending().await
    }

    async fn create(&self, _question: NewQuestion) -> Result<Question, StoreError> {
        std::future::pending().await
    }

    async fn update(
        &self,
        _id: QuestionId,
        _patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        std::future::pending().await
    }
}
