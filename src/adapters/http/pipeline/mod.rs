//! Pipeline HTTP adapter module.
//!
//! Provides the REST endpoint the pipeline editor submits graphs to.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    EdgeRequest, ErrorResponse, NodeRequest, ParsePipelineRequest, ParsePipelineResponse,
};
pub use handlers::{PipelineApiError, PipelineAppState};
pub use routes::pipeline_router;
