//! Lightweight in-process metrics registry.
//!
//! Gauges and gauge vectors are stored as atomics (f64 bit patterns) and
//! rendered in Prometheus text exposition format by [`Registry::render`].
//! Collectors are keyed by fully-qualified name; registering the same name
//! twice is rejected so that two components cannot silently share a series.

pub mod desc;
pub mod gauge;
pub mod registry;

pub use desc::{Desc, Opts};
pub use gauge::{Gauge, GaugeChild, GaugeVec};
pub use registry::{Collector, MetricFamily, Registry, Sample};
