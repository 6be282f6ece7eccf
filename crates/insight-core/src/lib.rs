pub mod config;
pub mod error;
pub mod types;

pub use config::InsightConfig;
pub use error::{InsightError, Result};
pub use types::*;
