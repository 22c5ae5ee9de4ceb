use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::hostname::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    HostnameLookup(#[from] LookupError),

    #[error("Handler panicked: {0}")]
    Panic(String),
}

/// Body sent for every server-side failure; details stay in the log.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, CACHE_CONTROL_NO_STORE)],
            INTERNAL_ERROR_BODY,
        )
            .into_response()
    }
}

/// Turn a caught handler panic into the same 500 as any other failure.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer` so a panicking
/// handler still answers instead of dropping the connection.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Panic(message).into_response()
}
