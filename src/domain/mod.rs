//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `pipeline` - Pipeline graph identifiers and acyclicity checking

pub mod pipeline;
