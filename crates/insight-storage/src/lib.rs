//! Insight Storage crate - in-memory record store for users, chat sessions
//! and queries.
//!
//! The [`Storage`] trait is the seam the API layer depends on; [`MemStorage`]
//! is the process-lifetime implementation. Nothing survives a restart.

pub mod memory;
pub mod storage;
mod table;

pub use memory::MemStorage;
pub use storage::Storage;
