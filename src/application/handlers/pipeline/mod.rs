//! Pipeline handlers.

mod parse_pipeline;

pub use parse_pipeline::{ParsePipelineCommand, ParsePipelineHandler, ParsePipelineResult};
