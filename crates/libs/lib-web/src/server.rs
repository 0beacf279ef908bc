//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! [`start_server`] loads configuration, connects and migrates the database and
//! serves the router built by [`create_router`]. Tests drive [`create_router`]
//! directly with an in-memory pool.

// region: --- Imports
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use lib_core::{create_pool, Config, DbPool};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::middleware::{log_requests, map_res, require_auth, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server options that are not read from the environment.
pub struct ServerConfig {
    /// Database migrations directory
    pub migrations_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            migrations_path: "./crates/libs/lib-core/migrations".to_string(),
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = lib_utils::get_env_or("LOG_LEVEL", "info").to_lowercase();
    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    info!("QUICKGPT BACKEND STARTING");
    info!("Log level: {}", log_level);

    info!("Loading configuration...");
    let config = Config::from_env()?;

    // Ensure data directory exists for SQLite database
    if let Some(db_path) = config.database_url.strip_prefix("sqlite:") {
        let db_path = db_path.trim_start_matches("//");
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&config.database_url).await?;

    info!("Running database migrations from: {}", server_config.migrations_path);
    let migrator = sqlx::migrate::Migrator::new(Path::new(&server_config.migrations_path)).await?;
    migrator.run(&pool).await?;
    info!("Migrations complete");

    let bind_address = config.bind_address.clone();
    let app = create_router(AppState { db: pool, config });

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    // Routes behind the bearer token check
    let protected = Router::new()
        .route("/api/user/data", get(handlers::user::get_user_data))
        .route("/api/chat/get", get(handlers::chat::get_chats))
        .route("/api/chat/create", post(handlers::chat::create_chat))
        .route("/api/chat/delete", post(handlers::chat::delete_chat))
        .route("/api/chat/message", post(handlers::chat::append_message))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(|| async { "Server is Live!" }))
        .route("/health", get(|| async { "OK" }))
        .route("/api/user/register", post(handlers::user::register))
        .route("/api/user/login", post(handlers::user::login))
        .merge(protected)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Route not found") })
        .with_state(state)
        // Innermost: JSON-ify bare error bodies
        .layer(axum::middleware::from_fn(map_res))
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri().path(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(error = ?error, latency_ms = latency.as_millis(), "[HTTP FAILURE]");
                    },
                ),
        )
        // Outside the trace layer so spans carry the request id
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// CORS for the browser client. No configured origins means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(origins)
}

/// Log server information
fn log_server_info() {
    info!(" USER:");
    info!("   • POST /api/user/register");
    info!("   • POST /api/user/login");
    info!("   • GET  /api/user/data        (bearer)");
    info!(" CHAT:");
    info!("   • GET  /api/chat/get         (bearer)");
    info!("   • POST /api/chat/create      (bearer)");
    info!("   • POST /api/chat/delete      (bearer)");
    info!("   • POST /api/chat/message     (bearer)");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
