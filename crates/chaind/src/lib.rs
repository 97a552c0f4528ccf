//! Top-level facade crate for chaind instrumentation.
//!
//! Re-exports the metrics registry and the registrar so hosts can depend on a single crate.

pub mod core {
    pub use chaind_core::*;
}

pub mod monitor {
    pub use chaind_monitor::*;
}
