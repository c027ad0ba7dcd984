//! HTTP DTOs (Data Transfer Objects) for pipeline endpoints.
//!
//! These types define the JSON request/response structure for the pipeline
//! API. Nodes and edges carry whatever the visual editor sends; only the
//! identifiers are handed to the application layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::{ParsePipelineCommand, ParsePipelineResult};
use crate::domain::pipeline::{Edge, NodeId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A node as submitted by the pipeline editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRequest {
    /// Node identifier.
    pub id: String,
    /// Editor node type (e.g. `customInput`, `llm`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Arbitrary display data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    /// Canvas coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<HashMap<String, f64>>,
}

/// An edge as submitted by the pipeline editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRequest {
    /// Edge identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Output handle on the source node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    /// Input handle on the target node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// Request to parse a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsePipelineRequest {
    pub nodes: Vec<NodeRequest>,
    pub edges: Vec<EdgeRequest>,
}

impl From<ParsePipelineRequest> for ParsePipelineCommand {
    fn from(request: ParsePipelineRequest) -> Self {
        Self {
            nodes: request.nodes.into_iter().map(|n| NodeId::new(n.id)).collect(),
            edges: request
                .edges
                .into_iter()
                .map(|e| Edge::new(e.source, e.target))
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a parsed pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsePipelineResponse {
    /// Number of nodes submitted.
    pub num_nodes: usize,
    /// Number of edges submitted.
    pub num_edges: usize,
    /// Whether the pipeline is a directed acyclic graph.
    pub is_dag: bool,
    /// Human-readable status message.
    pub message: String,
}

impl From<ParsePipelineResult> for ParsePipelineResponse {
    fn from(result: ParsePipelineResult) -> Self {
        Self {
            num_nodes: result.num_nodes,
            num_edges: result.num_edges,
            is_dag: result.is_dag,
            message: result.message,
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new("UNPROCESSABLE_ENTITY", message)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new("UNSUPPORTED_MEDIA_TYPE", message)
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details.map(Value::String);
        self
    }
}
