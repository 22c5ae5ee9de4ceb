//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener bound to the configured address
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
