//! Error types for mst-replay.

use thiserror::Error;

/// Result type for replay operations.
pub type Result<T> = std::result::Result<T, ReplayError>;

/// Errors returned by the replay controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The session was exited; no further operations are accepted.
    #[error("replay session is closed")]
    SessionClosed,

    /// A direct snapshot lookup was outside the trace.
    #[error("step {index} out of range (trace has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while loading a [`VisConfig`](crate::VisConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for the config shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Layout scale must be finite and positive.
    #[error("invalid layout scale {0}")]
    InvalidScale(f64),
}
