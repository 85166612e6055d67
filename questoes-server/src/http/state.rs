//! Application state shared across handlers

use std::sync::Arc;

use crate::db::QuestionStore;

/// Static identity reported by `GET /`
#[derive(Debug, Clone)]
pub struct ApiInfo {
    pub descricao: String,
    pub autor: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            descricao: "API de exemplo para atividade #13".to_string(),
            autor: "Vinicius araujo matos".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn QuestionStore>,
    info: ApiInfo,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, info: ApiInfo) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, info }),
        }
    }

    pub fn store(&self) -> &dyn QuestionStore {
        self.inner.store.as_ref()
    }

    pub fn info(&self) -> &ApiInfo {
        &self.inner.info
    }
}
