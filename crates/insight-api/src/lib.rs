//! Insight API crate - axum HTTP server and route handlers.
//!
//! Provides the REST surface for query submission, history listing,
//! clearing and export, chat sessions, a health check, and the static UI.

pub mod error;
pub mod handlers;
pub mod responder;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use responder::Responder;
pub use routes::create_router;
pub use state::AppState;
