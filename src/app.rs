use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    config::AppConfig,
    database::{self, MemoryProductStore, PgProductStore, ProductStore},
    error::{AppError, Result},
    routes,
    services::ProductService,
};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            products: ProductService::new(store),
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store: Arc<dyn ProductStore> = if config.database.url.is_some() {
        let pool = database::create_pool(&config.database).await?;
        Arc::new(PgProductStore::new(pool))
    } else {
        tracing::warn!("DB_URL not set, using in-memory product store");
        Arc::new(MemoryProductStore::new())
    };

    router(AppState::new(store), config)
}

pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    Ok(app)
}

pub async fn serve(config: &AppConfig) -> Result<()> {
    let app = build(config).await?;

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind to {}: {}", addr, e)))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

// Resolves on Ctrl+C or SIGTERM. A handler that cannot be installed never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serve_fails_when_address_is_taken() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = taken.local_addr().unwrap().port();

        let err = serve(&config).await.unwrap_err();

        match err {
            AppError::ConfigError(msg) => assert!(msg.starts_with("Failed to bind to 127.0.0.1:")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn invalid_cors_origin_is_rejected() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["bad\norigin".to_string()];
        let state = AppState::new(Arc::new(MemoryProductStore::new()));

        let err = router(state, &config).unwrap_err();

        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
