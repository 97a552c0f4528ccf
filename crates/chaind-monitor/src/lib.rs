//! chaind process instrumentation.
//!
//! This crate registers the process gauges (start time, release, readiness)
//! with the metrics service selected by its presenter, and wires a small ops
//! HTTP surface (`/metrics`, `/healthz`, `/readyz`) around them. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod ops;
pub mod presenter;
pub mod registrar;
pub mod router;
pub mod service;

pub use presenter::Presenter;
pub use registrar::{Instrumentation, RegistrationState, METRICS_NAMESPACE};
pub use service::{MetricsService, NullService, PrometheusService};
