//! Route configuration for pipeline endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{parse_pipeline, PipelineAppState};

/// Creates the pipeline router.
///
/// Routes:
/// - `POST /pipelines/parse` - Count nodes and edges and check for cycles
pub fn pipeline_router() -> Router<PipelineAppState> {
    Router::new().route("/pipelines/parse", post(parse_pipeline))
}
