//! Postgres question store
//!
//! Update and delete are single statements with `RETURNING`, so the row
//! handed back is exactly the one written or removed and zero affected
//! rows means not found.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{QuestionStore, StoreError};
use crate::models::{NewQuestion, Question, QuestionId, QuestionPatch};

/// DDL for the `questoes` table. Applied by the operator, not at startup.
pub const SCHEMA: &str = include_str!("../../sql/questoes.sql");

/// Question store backed by a sqlx Postgres pool
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let row: Option<Question> = sqlx::query_as(
            r#"
            SELECT id, enunciado, disciplina, tema, nivel
            FROM questoes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let row: Question = sqlx::query_as(
            r#"
            INSERT INTO questoes (enunciado, disciplina, tema, nivel)
            VALUES ($1, $2, $3, $4)
            RETURNING id, enunciado, disciplina, tema, nivel
            "#,
        )
        .bind(&question.enunciado)
        .bind(&question.disciplina)
        .bind(&question.tema)
        .bind(&question.nivel)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        // NULL parameters fall back to the stored column
        let row: Option<Question> = sqlx::query_as(
            r#"
            UPDATE questoes
            SET enunciado = COALESCE($2, enunciado),
                disciplina = COALESCE($3, disciplina),
                tema = COALESCE($4, tema),
                nivel = COALESCE($5, nivel)
            WHERE id = $1
            RETURNING id, enunciado, disciplina, tema, nivel
            "#,
        )
        .bind(id)
        .bind(patch.enunciado)
        .bind(patch.disciplina)
        .bind(patch.tema)
        .bind(patch.nivel)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let row: Option<Question> = sqlx::query_as(
            r#"
            DELETE FROM questoes
            WHERE id = $1
            RETURNING id, enunciado, disciplina, tema, nivel
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
