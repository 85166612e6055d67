//! Question endpoints - CRUD over the `questoes` table

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidQuestionId};
use crate::http::state::AppState;
use crate::models::{Question, QuestionPayload};

/// Response for create and update
#[derive(Debug, Serialize)]
pub struct QuestionEnvelope {
    pub mensagem: &'static str,
    pub questao: Question,
}

/// Response for delete
#[derive(Debug, Serialize)]
pub struct DeletedEnvelope {
    pub mensagem: &'static str,
    pub questao_excluida: Question,
}

/// GET /questoes - list every question
async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, ApiError> {
    let rows = state.store().list().await?;
    Ok(Json(rows))
}

/// GET /questoes/{id} - get a single question
async fn get_question(
    State(state): State<AppState>,
    ValidQuestionId(id): ValidQuestionId,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .store()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(Json(question))
}

/// POST /questoes - create a question
async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuestionPayload>,
) -> Result<(StatusCode, Json<QuestionEnvelope>), ApiError> {
    let new = payload.into_new()?;
    let question = state.store().create(new).await?;
    tracing::info!(id = question.id, "question created");

    Ok((
        StatusCode::CREATED,
        Json(QuestionEnvelope {
            mensagem: "Questão criada com sucesso!",
            questao: question,
        }),
    ))
}

/// PUT /questoes/{id} - merge supplied fields over the stored question
async fn update_question(
    State(state): State<AppState>,
    ValidQuestionId(id): ValidQuestionId,
    ApiJson(payload): ApiJson<QuestionPayload>,
) -> Result<Json<QuestionEnvelope>, ApiError> {
    let patch = payload.into_patch();
    if patch.is_empty() {
        tracing::debug!(id, "update without fields, row left as is");
    }

    let question = state
        .store()
        .update(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(id))?;
    tracing::info!(id, "question updated");

    Ok(Json(QuestionEnvelope {
        mensagem: "Questão atualizada com sucesso!",
        questao: question,
    }))
}

/// DELETE /questoes/{id} - delete and return the removed question
async fn delete_question(
    State(state): State<AppState>,
    ValidQuestionId(id): ValidQuestionId,
) -> Result<Json<DeletedEnvelope>, ApiError> {
    let removed = state
        .store()
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found(id))?;
    tracing::info!(id, "question deleted");

    Ok(Json(DeletedEnvelope {
        mensagem: "Questão excluída com sucesso!",
        questao_excluida: removed,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questoes", get(list_questions).post(create_question))
        .route(
            "/questoes/{id}",
            get(get_question)
                .put(update_question)
                .delete(delete_question),
        )
}
