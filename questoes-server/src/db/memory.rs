//! In-memory question store
//!
//! Same contract as the Postgres store: ids come from a sequence that never
//! reuses values, list order is ascending id.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::store::{QuestionStore, StoreError};
use crate::models::{NewQuestion, Question, QuestionId, QuestionPatch};

#[derive(Default)]
struct Table {
    last_id: QuestionId,
    rows: BTreeMap<QuestionId, Question>,
}

/// Question store held in process memory
#[derive(Default)]
pub struct MemoryQuestionStore {
    table: Mutex<Table>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.rows.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }

    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut table = self.lock()?;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("id sequence exhausted".into()))?;
        table.last_id = id;

        let row = Question {
            id,
            enunciado: question.enunciado,
            disciplina: question.disciplina,
            tema: question.tema,
            nivel: question.nivel,
        };
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        let mut table = self.lock()?;
        let Some(current) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        *current = patch.apply_to(current);
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.lock()?.rows.remove(&id))
    }
}
