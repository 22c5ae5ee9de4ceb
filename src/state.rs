//! Shared application state for request handlers.

use std::sync::Arc;

use crate::hostname::{HostnameSource, SystemHostname};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
#[derive(Clone)]
pub struct AppState {
    pub hostname: Arc<dyn HostnameSource>,
}

impl AppState {
    /// Creates state that reads the host name from the operating system.
    pub fn new() -> Self {
        Self::with_hostname_source(SystemHostname)
    }

    pub fn with_hostname_source(source: impl HostnameSource + 'static) -> Self {
        Self {
            hostname: Arc::new(source),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
