//! Transport-level error type exposed by the RPC boundary.

use thiserror::Error;

/// Error surfaced by a transport implementation when an RPC does not
/// produce a wire response.
///
/// The gateway never inspects transport internals beyond the two
/// predicates [`can_retry`](TransportError::can_retry) and
/// [`is_forced_upgrade`](TransportError::is_forced_upgrade).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Service unreachable (connection refused, DNS failure, etc.).
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete within the transport's deadline.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The service asked the caller to back off.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The service refused the client version; callers must upgrade
    /// before retrying.
    #[error("Client upgrade required: {0}")]
    UpgradeRequired(String),

    /// Any other status returned by the service.
    #[error("RPC status {code}: {message}")]
    Status { code: i32, message: String },
}

impl TransportError {
    /// Whether the failed call may be retried as-is.
    ///
    /// Checked before [`is_forced_upgrade`](Self::is_forced_upgrade) at
    /// every classification site; if an error ever satisfied both
    /// predicates, retry semantics win.
    pub fn can_retry(&self) -> bool {
        matches!(
            self,
            Self::Unavailable(_) | Self::Timeout(_) | Self::RateLimited(_)
        )
    }

    /// Whether the service demanded a client upgrade.
    pub fn is_forced_upgrade(&self) -> bool {
        matches!(self, Self::UpgradeRequired(_))
    }
}
