//! Metrics services (the backends the registrar registers against).
//!
//! Re-exports the service trait and the built-in implementations so
//! downstream consumers can depend on this module directly.

pub mod null;
pub mod prometheus;

pub use null::NullService;
pub use prometheus::PrometheusService;

use chaind_core::metrics::Registry;

/// A monitoring backend as seen by the registrar.
pub trait MetricsService: Send + Sync {
    /// Identifier of the exposition backend, e.g. `"prometheus"` or `"null"`.
    fn presenter(&self) -> &str;

    /// Registry collectors are registered with, if the backend has one.
    fn registry(&self) -> Option<&Registry> {
        None
    }
}
