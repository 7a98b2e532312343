mod auth;
mod config;
mod db;
mod entities;
mod error;
mod extract;
mod models;
mod openapi;
mod routes;
mod service;
mod store;
mod templates;
mod token;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{Config, StoreBackend},
    service::MovieService,
    store::{DatabaseStore, MemoryStore, MovieStore},
    token::TokenService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: TokenService,
    pub movies: MovieService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelbox=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let store: Arc<dyn MovieStore> = match config.store {
        StoreBackend::Database => {
            let db = db::connect_and_migrate(&config.database_url, config.db_max_connections)
                .await?;
            tracing::info!(url = %config.database_url, "using database movie store");
            Arc::new(DatabaseStore::new(db))
        },
        StoreBackend::Memory => {
            tracing::warn!("using in-memory movie store; data is lost on restart");
            Arc::new(MemoryStore::new())
        },
    };

    let state = Arc::new(AppState {
        config: config.clone(),
        tokens: TokenService::new(&config.jwt_secret),
        movies: MovieService::new(store),
    });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
