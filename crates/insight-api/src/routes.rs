//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use insight_core::error::InsightError;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Allow the page served by this process and a dev server on port + 1.
    let host = state.config.server.host.clone();
    let port = state.config.server.port;
    let dev_port = port.saturating_add(1);
    let origins: Vec<HeaderValue> = [
        format!("http://{}:{}", host, port),
        format!("http://localhost:{}", port),
        format!("http://{}:{}", host, dev_port),
        format!("http://localhost:{}", dev_port),
    ]
    .iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let api_routes = Router::new()
        .route(
            "/queries",
            get(handlers::list_queries)
                .post(handlers::submit_query)
                .delete(handlers::clear_queries),
        )
        .route("/export", get(handlers::export_queries))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/{id}/queries", get(handlers::session_queries));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured host and port.
pub async fn start_server(state: AppState) -> Result<(), InsightError> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| InsightError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Search UI at http://{}/", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| InsightError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
