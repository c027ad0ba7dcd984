//! Router assembly and server lifecycle.
//!
//! Mounts the health and pipeline routers and wraps them in the middleware
//! stack: request ids, tracing, CORS, timeout and compression.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::ParsePipelineHandler;
use crate::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use crate::telemetry::TelemetryError;

use super::health::{health_router, HealthAppState};
use super::pipeline::{pipeline_router, PipelineAppState};

/// Errors that stop the service from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the CORS policy from the configured origins.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard.
pub fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = server.cors_header_values()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Creates the complete application router.
///
/// # Errors
///
/// Returns `ValidationError` if a configured CORS origin is not a valid
/// header value.
pub fn build_router(config: &AppConfig) -> Result<Router, ValidationError> {
    let health_state = HealthAppState::new(config.server.service_name.clone());
    let pipeline_state =
        PipelineAppState::new(ParsePipelineHandler::new(), config.features.verbose_errors);

    let router = Router::new()
        .merge(health_router().with_state(health_state))
        .merge(pipeline_router().with_state(pipeline_state))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(cors_layer(&config.server)?)
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        );

    let router = if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    Ok(router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

/// Binds the configured address and serves until a shutdown signal arrives.
pub async fn serve(config: AppConfig) -> Result<(), StartupError> {
    let addr = config.server.socket_addr()?;
    let app = build_router(&config)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, environment = ?config.server.environment, "Pipeline API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Pipeline API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
