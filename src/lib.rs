//! hostecho - report the host network name over HTTP.
//!
//! `GET /` answers `Hostname: <name>` with the name the operating system
//! reports at request time, `GET /health` answers `OK`.

pub mod config;
pub mod error;
pub mod hostname;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
