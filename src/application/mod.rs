//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations between the HTTP boundary
//! and the domain core.

pub mod handlers;

pub use handlers::{ParsePipelineCommand, ParsePipelineHandler, ParsePipelineResult};
