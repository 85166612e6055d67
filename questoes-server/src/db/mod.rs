//! Database layer - connection pool and question stores
//!
//! Handlers only see [`QuestionStore`]. The Postgres implementation issues
//! exactly one parameterized statement per operation; the in-memory one
//! mirrors its semantics for tests and local runs.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use memory::MemoryQuestionStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::{PgQuestionStore, SCHEMA};
pub use store::{QuestionStore, StoreError};
