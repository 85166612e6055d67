//! questoes-server: HTTP API over the `questoes` question bank
//!
//! Five operations (list, get, create, update, delete) over one Postgres
//! table plus a liveness probe at `/`. Handlers reach the database through
//! the [`db::QuestionStore`] trait, so the router can be exercised against
//! [`db::MemoryQuestionStore`] without a database.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, MemoryQuestionStore, PgQuestionStore, QuestionStore, StoreError};
pub use http::{build_router, run_server, ApiError, ApiInfo, AppState, ServerConfig, ServerError};
pub use models::{Question, ValidationError};
