//! Shared error types across chaind crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChaindError>;

/// Reasons a registry refuses a collector or a label lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate metrics collector registration attempted: {0}")]
    AlreadyRegistered(String),
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("inconsistent label cardinality: expected {expected} label values, got {got}")]
    InconsistentCardinality { expected: usize, got: usize },
}

/// Unified error type used by core and monitor.
#[derive(Debug, Error)]
pub enum ChaindError {
    #[error("failed to register {metric}: {source}")]
    Registration {
        metric: &'static str,
        #[source]
        source: RegistryError,
    },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ChaindError {
    /// Name of the metric whose registration failed, if any.
    pub fn metric(&self) -> Option<&'static str> {
        match self {
            ChaindError::Registration { metric, .. } => Some(metric),
            _ => None,
        }
    }
}

