//! Postgres pool construction
//!
//! `questoes serve` builds one pool at startup and hands it to
//! `PgQuestionStore`; handlers never open connections themselves.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when `--max-connections` is not given
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect eagerly, so a bad `DATABASE_URL` fails startup instead of the
/// first request.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::db::{PgQuestionStore, QuestionStore, SCHEMA};
    use crate::models::NewQuestion;

    fn database_url() -> String {
        std::env::var("DATABASE_URL").expect("DATABASE_URL required")
    }

    #[tokio::test]
    async fn malformed_url_is_rejected() {
        assert!(create_pool("not-a-database-url").await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn default_pool_answers_store_ping() {
        let pool = create_pool(&database_url()).await.unwrap();
        PgQuestionStore::new(pool).ping().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn small_pool_serves_concurrent_inserts() {
        let pool = create_pool_with_options(&database_url(), 2).await.unwrap();
        sqlx::query(SCHEMA).execute(&pool).await.unwrap();
        let store = PgQuestionStore::new(pool);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(NewQuestion {
                            enunciado: format!("pool {i}"),
                            disciplina: "Math".into(),
                            tema: "Concurrency".into(),
                            nivel: i.to_string(),
                        })
                        .await
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let created = handle.await.unwrap().unwrap();
            assert_eq!(created.tema, "Concurrency");
            ids.insert(created.id);
        }
        assert_eq!(ids.len(), 8);

        for id in ids {
            store.delete(id).await.unwrap();
        }
    }
}
