//! Host network name lookup.
//!
//! The name is read from the operating system on every call and never cached,
//! so a host renamed while the process runs is reported correctly.

/// Failure to obtain the host name from the operating system.
#[derive(Debug, thiserror::Error)]
#[error("Host name lookup failed: {0}")]
pub struct LookupError(pub String);

impl From<sys_info::Error> for LookupError {
    fn from(err: sys_info::Error) -> Self {
        LookupError(err.to_string())
    }
}

/// Something that can report the network name of the running host.
pub trait HostnameSource: Send + Sync {
    fn hostname(&self) -> Result<String, LookupError>;
}

/// Asks the operating system each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String, LookupError> {
        Ok(sys_info::hostname()?)
    }
}

/// Always reports the same name.
#[derive(Debug, Clone)]
pub struct FixedHostname(pub String);

impl FixedHostname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> Result<String, LookupError> {
        Ok(self.0.clone())
    }
}
