//! Pipeline API - Validation service for visual pipeline graphs
//!
//! Accepts the nodes and edges drawn in a pipeline editor and reports
//! whether they form a directed acyclic graph.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
