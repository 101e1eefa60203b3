//! axum adapter serving the validation handler over HTTP.

use crate::config::ServerConfig;
use crate::core::{handle_validation, ValidationOutcome};
use crate::utils::error::{Result, ServiceError};
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const VALIDATE_PATH: &str = "validate-cpf";

/// Joins the routing prefix with `/validate-cpf`; `""` and `"/"` mean no prefix.
pub fn validation_route(prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("/{}", VALIDATE_PATH)
    } else {
        format!("/{}/{}", prefix, VALIDATE_PATH)
    }
}

pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route(
            &validation_route(&config.route_prefix),
            get(validate_cpf).post(validate_cpf),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

async fn validate_cpf(RawQuery(query): RawQuery) -> Response {
    let outcome = handle_validation(query.as_deref());
    let status = match outcome {
        ValidationOutcome::Valid { .. } => StatusCode::OK,
        ValidationOutcome::Rejected => StatusCode::BAD_REQUEST,
    };

    (status, Json(outcome.into_response())).into_response()
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Serves `router` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServiceError::ServerError {
            message: e.to_string(),
        })
}

/// Binds `host:port` and serves until Ctrl+C or SIGTERM.
pub async fn run_server(config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        addr = %local_addr,
        route = %validation_route(&config.route_prefix),
        "CPF validator listening"
    );

    serve(listener, build_router(config), shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
