//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{QuestionId, ValidationError};

/// Extract a question id from the path.
///
/// An id that is not a valid integer cannot match any row, so it is
/// answered the same way as an unknown id.
pub struct ValidQuestionId(pub QuestionId);

impl<S> FromRequestParts<S> for ValidQuestionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found(""))?;

        raw.trim()
            .parse::<QuestionId>()
            .map(Self)
            .map_err(|_| ApiError::not_found(raw))
    }
}

/// JSON body extractor that reports failures as validation errors.
///
/// The content type is not enforced and an empty body reads as `{}`. A body
/// over the router's `DefaultBodyLimit` keeps its 413.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge {
                    reason: rejection.body_text(),
                }
            } else {
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: rejection.body_text(),
                })
            }
        })?;

        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(raw).map(Self).map_err(|e| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: e.to_string(),
            })
        })
    }
}
