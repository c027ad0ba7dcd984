//! ParsePipelineHandler - Query handler for validating a submitted pipeline.
//!
//! Runs the acyclicity check and produces the counts and status message
//! reported back to the client.

use tracing::debug;

use crate::domain::pipeline::{AcyclicityChecker, Edge, NodeId};

/// Command carrying the identifiers extracted from a submitted pipeline.
#[derive(Debug, Clone, Default)]
pub struct ParsePipelineCommand {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

/// Result of parsing a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePipelineResult {
    /// Number of nodes submitted, duplicates included.
    pub num_nodes: usize,
    /// Number of edges submitted, dangling edges included.
    pub num_edges: usize,
    /// Whether the pipeline forms a directed acyclic graph.
    pub is_dag: bool,
    /// Human-readable summary of the verdict.
    pub message: String,
}

/// Handler for parsing pipelines.
#[derive(Debug, Clone, Default)]
pub struct ParsePipelineHandler;

impl ParsePipelineHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: ParsePipelineCommand) -> ParsePipelineResult {
        let analysis = AcyclicityChecker::analyze(&command.nodes, &command.edges);

        debug!(
            num_nodes = analysis.num_nodes,
            num_edges = analysis.num_edges,
            is_dag = analysis.is_dag,
            "Pipeline parsed"
        );

        ParsePipelineResult {
            num_nodes: analysis.num_nodes,
            num_edges: analysis.num_edges,
            is_dag: analysis.is_dag,
            message: summary_message(analysis.num_nodes, analysis.num_edges, analysis.is_dag),
        }
    }
}

fn summary_message(num_nodes: usize, num_edges: usize, is_dag: bool) -> String {
    if is_dag {
        format!(
            "Pipeline is valid! Contains {} nodes and {} edges forming a valid DAG.",
            num_nodes, num_edges
        )
    } else {
        "Pipeline contains a cycle! Please remove circular dependencies to create a valid DAG."
            .to_string()
    }
}
