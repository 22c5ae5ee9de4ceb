//! Liveness endpoint polled by load balancers in front of the service.

/// Body returned by the liveness probe.
pub const HEALTH_BODY: &str = "OK";

/// Answers `OK` whenever the process can serve HTTP.
///
/// Never touches the host name lookup, so a broken lookup does not mark the
/// instance dead.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
