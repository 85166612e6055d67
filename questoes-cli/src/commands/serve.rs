//! HTTP server command for the questoes API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use questoes_server::db::{create_pool_with_options, PgQuestionStore, DEFAULT_MAX_CONNECTIONS};
use questoes_server::http::{run_server, ApiInfo, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "QUESTOES_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "QUESTOES_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, env = "QUESTOES_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Description reported by GET /
    #[arg(long, env = "QUESTOES_DESCRICAO")]
    pub descricao: Option<String>,

    /// Author reported by GET /
    #[arg(long, env = "QUESTOES_AUTOR")]
    pub autor: Option<String>,
}

impl ServeArgs {
    fn api_info(&self) -> ApiInfo {
        let defaults = ApiInfo::default();
        ApiInfo {
            descricao: self.descricao.clone().unwrap_or(defaults.descricao),
            autor: self.autor.clone().unwrap_or(defaults.autor),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting questoes server on {}", args.bind);

    let pool = create_pool_with_options(database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let store = Arc::new(PgQuestionStore::new(pool));
    let state = AppState::new(store, args.api_info());

    // Run server (blocks until shutdown)
    run_server(state, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
