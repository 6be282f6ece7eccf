//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its inputs via axum extractors, calls the store on
//! AppState, and returns JSON. Store faults become the endpoint's generic
//! error message; see [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use insight_core::types::{
    ChatSession, ExportEnvelope, NewChatSession, NewQuery, Query, DEFAULT_USER_ID,
};

use crate::error::ApiError;
use crate::state::AppState;

const INVALID_QUERY_DATA: &str = "Invalid query data";
const FETCH_QUERIES_FAILED: &str = "Failed to fetch queries";
const CLEAR_QUERIES_FAILED: &str = "Failed to clear queries";
const EXPORT_FAILED: &str = "Failed to export data";
const CREATE_SESSION_FAILED: &str = "Failed to create session";
const FETCH_SESSION_FAILED: &str = "Failed to fetch session";
const DELETE_SESSION_FAILED: &str = "Failed to delete session";
const SESSION_NOT_FOUND: &str = "Session not found";
const HEALTH_CHECK_FAILED: &str = "Health check failed";

// =============================================================================
// Request / response types
// =============================================================================

/// Request body for POST /api/queries.
///
/// Only `query` is required. A client-supplied `response` is accepted and
/// then replaced by the generated answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQueryRequest {
    pub query: String,
    #[serde(default)]
    pub session_id: Option<u64>,
    #[serde(default)]
    pub is_voice_input: Option<bool>,
    #[serde(default)]
    pub data_sources: Option<Vec<String>>,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub total_queries: u64,
    pub total_sessions: u64,
}

// =============================================================================
// Queries
// =============================================================================

/// POST /api/queries - store a question with its generated answer.
pub async fn submit_query(
    State(state): State<AppState>,
    payload: Result<Json<SubmitQueryRequest>, JsonRejection>,
) -> Result<Json<Query>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected query body");
        ApiError::InvalidInput(INVALID_QUERY_DATA)
    })?;

    if req.query.trim().is_empty() {
        return Err(ApiError::InvalidInput(INVALID_QUERY_DATA));
    }

    let data_sources = req.data_sources.unwrap_or_default();
    let response = state.responder.respond(&req.query, &data_sources);

    let query = state
        .storage
        .create_query(NewQuery {
            session_id: req.session_id,
            query: req.query,
            response: Some(response),
            is_voice_input: req.is_voice_input,
            data_sources,
        })
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store query");
            ApiError::InvalidInput(INVALID_QUERY_DATA)
        })?;

    tracing::info!(
        id = query.id,
        session_id = query.session_id,
        voice = query.is_voice_input,
        sources = query.data_sources.len(),
        "Query stored"
    );

    Ok(Json(query))
}

/// GET /api/queries - every stored query.
pub async fn list_queries(State(state): State<AppState>) -> Result<Json<Vec<Query>>, ApiError> {
    let queries = state
        .storage
        .get_all_queries()
        .map_err(ApiError::internal(FETCH_QUERIES_FAILED))?;
    tracing::debug!(count = queries.len(), "Listed queries");
    Ok(Json(queries))
}

/// DELETE /api/queries - drop the whole query history.
pub async fn clear_queries(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .storage
        .clear_all_queries()
        .map_err(ApiError::internal(CLEAR_QUERIES_FAILED))?;
    tracing::info!(removed, "Query history cleared");
    Ok(Json(MessageResponse {
        message: "All queries cleared successfully".to_string(),
    }))
}

/// GET /api/export - query history as a downloadable JSON file.
pub async fn export_queries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let queries = state
        .storage
        .export_queries()
        .map_err(ApiError::internal(EXPORT_FAILED))?;
    let envelope = ExportEnvelope::new(Utc::now(), &queries);
    tracing::info!(total = envelope.total_queries, "History exported");

    let disposition = format!("attachment; filename={}", state.config.export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Json(envelope),
    ))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /api/sessions - open a session for the demo user.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<ChatSession>, ApiError> {
    let session = state
        .storage
        .create_chat_session(NewChatSession {
            user_id: Some(DEFAULT_USER_ID),
            title: Some(state.responder.session_title()),
        })
        .map_err(ApiError::internal(CREATE_SESSION_FAILED))?;
    tracing::info!(id = session.id, "Chat session created");
    Ok(Json(session))
}

/// GET /api/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ChatSession>, ApiError> {
    state
        .storage
        .get_chat_session(id)
        .map_err(ApiError::internal(FETCH_SESSION_FAILED))?
        .map(Json)
        .ok_or(ApiError::NotFound(SESSION_NOT_FOUND))
}

/// GET /api/sessions/{id}/queries
pub async fn session_queries(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Query>>, ApiError> {
    let queries = state
        .storage
        .get_queries_by_session_id(id)
        .map_err(ApiError::internal(FETCH_QUERIES_FAILED))?;
    tracing::debug!(session_id = id, count = queries.len(), "Listed session queries");
    Ok(Json(queries))
}

/// DELETE /api/sessions/{id} - remove a session and its queries.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .storage
        .delete_chat_session(id)
        .map_err(ApiError::internal(DELETE_SESSION_FAILED))?;
    tracing::info!(id, "Chat session deleted");
    Ok(Json(MessageResponse {
        message: "Session deleted successfully".to_string(),
    }))
}

// =============================================================================
// Health and UI
// =============================================================================

/// GET /health
///
/// An unreadable store fails the check with a 500.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let total_queries = state
        .storage
        .query_count()
        .map_err(ApiError::internal(HEALTH_CHECK_FAILED))? as u64;
    let total_sessions = state
        .storage
        .session_count()
        .map_err(ApiError::internal(HEALTH_CHECK_FAILED))? as u64;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_queries,
        total_sessions,
    }))
}

/// GET / - the self-contained search page.
pub async fn index() -> impl IntoResponse {
    Html(insight_ui::INDEX_HTML)
}
