//! chaind core: shared error types and the in-process metrics registry.
//!
//! This crate defines the metric primitives (gauges, gauge vectors,
//! descriptors) and the registry that exposes them in Prometheus text format.
//! It carries no transport or runtime dependencies so the registry can be
//! scraped by whatever HTTP surface the host chooses.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Metric updates never fail the caller; registration failures surface as
//! `RegistryError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{ChaindError, RegistryError, Result};
