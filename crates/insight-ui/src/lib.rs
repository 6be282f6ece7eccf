//! Insight UI crate - the single-page search client.
//!
//! The page is a self-contained HTML document (inline CSS and JS, no build
//! step) embedded at compile time and served by the API at `/`. It talks to
//! the `/api` routes only.
//!
//! # Usage
//!
//! ```rust,ignore
//! use insight_ui::INDEX_HTML;
//! // In an axum handler:
//! async fn index() -> axum::response::Html<&'static str> {
//!     axum::response::Html(INDEX_HTML)
//! }
//! ```

/// The complete search page.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
