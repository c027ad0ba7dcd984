//! Pipeline Module - Graph vocabulary and cycle detection.
//!
//! # Components
//!
//! - `NodeId`, `Edge` - Narrow identifiers that cross into the domain
//! - `AcyclicityChecker` - Kahn's algorithm over a submitted graph
//! - `GraphAnalysis` - Raw counts plus the DAG verdict
//!
//! Everything here is pure and synchronous. No ports are needed since the
//! checker performs no I/O.

mod acyclicity;
mod graph;

pub use acyclicity::{AcyclicityChecker, GraphAnalysis};
pub use graph::{Edge, NodeId};
