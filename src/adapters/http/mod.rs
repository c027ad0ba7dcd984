//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure; `server`
//! assembles them into the application router.

pub mod health;
pub mod pipeline;
pub mod server;

// Re-export key types for convenience
pub use health::{health_router, HealthAppState};
pub use pipeline::{pipeline_router, PipelineAppState};
pub use server::{build_router, serve, StartupError};
