//! Application state shared across all route handlers.
//!
//! AppState is the explicitly constructed context handed to the router: the
//! record store, the answer template and the loaded configuration.

use std::sync::Arc;
use std::time::Instant;

use insight_core::config::InsightConfig;
use insight_storage::{MemStorage, Storage};

use crate::responder::Responder;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<InsightConfig>,
    /// Record store for users, sessions and queries.
    pub storage: Arc<dyn Storage>,
    /// Answer template built from the configured product name.
    pub responder: Arc<Responder>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over the given store.
    pub fn new(config: InsightConfig, storage: Arc<dyn Storage>) -> Self {
        let responder = Responder::new(config.responder.product_name.clone());
        Self {
            config: Arc::new(config),
            storage,
            responder: Arc::new(responder),
            start_time: Instant::now(),
        }
    }

    /// Create a new AppState backed by a fresh, empty [`MemStorage`].
    pub fn in_memory(config: InsightConfig) -> Self {
        Self::new(config, Arc::new(MemStorage::new()))
    }
}
