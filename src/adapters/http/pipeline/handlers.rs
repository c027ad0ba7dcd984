//! HTTP handlers for pipeline endpoints.
//!
//! These handlers connect Axum routes to the parse pipeline handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::application::ParsePipelineHandler;

use super::dto::{ErrorResponse, ParsePipelineRequest, ParsePipelineResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Pipeline API error that implements IntoResponse.
///
/// Every variant is a request that never reached the acyclicity checker.
/// `details` holds the parser message and is only populated when verbose
/// errors are enabled.
#[derive(Debug)]
pub enum PipelineApiError {
    MalformedJson { details: Option<String> },
    InvalidShape { details: Option<String> },
    UnsupportedMediaType { details: Option<String> },
    UnreadableBody { status: StatusCode, details: Option<String> },
}

impl PipelineApiError {
    /// Maps an Axum JSON rejection, keeping the parser message only if `verbose`.
    pub fn from_rejection(rejection: JsonRejection, verbose: bool) -> Self {
        let details = verbose.then(|| rejection.body_text());
        match rejection {
            JsonRejection::JsonSyntaxError(_) => PipelineApiError::MalformedJson { details },
            JsonRejection::JsonDataError(_) => PipelineApiError::InvalidShape { details },
            JsonRejection::MissingJsonContentType(_) => {
                PipelineApiError::UnsupportedMediaType { details }
            }
            other => PipelineApiError::UnreadableBody {
                status: other.status(),
                details,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PipelineApiError::MalformedJson { .. } => StatusCode::BAD_REQUEST,
            PipelineApiError::InvalidShape { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            PipelineApiError::UnreadableBody { status, .. } => *status,
        }
    }
}

impl IntoResponse for PipelineApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match self {
            PipelineApiError::MalformedJson { details } => {
                ErrorResponse::bad_request("Request body is not valid JSON").with_details(details)
            }
            PipelineApiError::InvalidShape { details } => ErrorResponse::unprocessable(
                "Request body must contain `nodes` with string `id`s and `edges` with string `source` and `target`",
            )
            .with_details(details),
            PipelineApiError::UnsupportedMediaType { details } => {
                ErrorResponse::unsupported_media_type(
                    "Expected request with `Content-Type: application/json`",
                )
                .with_details(details)
            }
            PipelineApiError::UnreadableBody { details, .. } => {
                ErrorResponse::bad_request("Failed to read request body").with_details(details)
            }
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for pipeline endpoints.
#[derive(Debug, Clone, Default)]
pub struct PipelineAppState {
    pub parse_handler: ParsePipelineHandler,
    /// Include parser messages in error responses.
    pub verbose_errors: bool,
}

impl PipelineAppState {
    pub fn new(parse_handler: ParsePipelineHandler, verbose_errors: bool) -> Self {
        Self {
            parse_handler,
            verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /pipelines/parse
///
/// Reports node and edge counts and whether the pipeline forms a DAG.
pub async fn parse_pipeline(
    State(state): State<PipelineAppState>,
    payload: Result<Json<ParsePipelineRequest>, JsonRejection>,
) -> Result<Json<ParsePipelineResponse>, PipelineApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "Rejected pipeline request: {}", rejection.body_text());
        PipelineApiError::from_rejection(rejection, state.verbose_errors)
    })?;

    let result = state.parse_handler.handle(request.into());
    info!(
        num_nodes = result.num_nodes,
        num_edges = result.num_edges,
        is_dag = result.is_dag,
        "Pipeline checked"
    );

    Ok(Json(result.into()))
}
