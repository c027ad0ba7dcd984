//! Adapters - Connections between the application and the outside world.
//!
//! - `http` - Axum routers, DTOs and the server lifecycle

pub mod http;
