//! Popular Songs Dashboard Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod server;

// Re-export commonly used types for convenience
pub use dashboard::Dashboard;
pub use dataset::{load_dataset, Dataset};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
