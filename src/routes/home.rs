//! Root page handler reporting the host network name.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Prefix placed before the host name in the response body.
pub const HOSTNAME_PREFIX: &str = "Hostname: ";

/// Report the network name of the machine serving this request.
///
/// The name is looked up fresh for every request.
pub async fn index(State(state): State<AppState>) -> Result<String, AppError> {
    let hostname = state.hostname.hostname()?;
    tracing::debug!(%hostname, "Resolved host name");
    Ok(format!("{}{}", HOSTNAME_PREFIX, hostname))
}
