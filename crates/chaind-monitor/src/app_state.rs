//! Shared application state for the ops HTTP surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chaind_core::error::Result;
use chaind_core::metrics::Registry;

use crate::config::HostConfig;
use crate::presenter::Presenter;
use crate::registrar::Instrumentation;
use crate::service::{MetricsService, NullService, PrometheusService};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    monitor: Option<Arc<dyn MetricsService>>,
    instrumentation: Instrumentation,
    ready: AtomicBool,
}

impl AppState {
    /// Build state around `monitor` and register the process gauges.
    ///
    /// A registration failure is returned alongside the state so the caller
    /// can decide whether it is fatal; the state is usable either way.
    pub fn new(monitor: Option<Arc<dyn MetricsService>>) -> (Self, Result<()>) {
        let instrumentation = Instrumentation::new();
        let registered = instrumentation.ensure_registered(monitor.as_deref());
        let state = Self {
            inner: Arc::new(AppStateInner {
                monitor,
                instrumentation,
                ready: AtomicBool::new(false),
            }),
        };
        (state, registered)
    }

    pub fn from_config(cfg: &HostConfig) -> (Self, Result<()>) {
        Self::new(build_monitor(cfg))
    }

    pub fn instrumentation(&self) -> &Instrumentation {
        &self.inner.instrumentation
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.inner.monitor.as_deref().and_then(|m| m.registry())
    }

    /// Flip readiness for `/readyz` and the ready gauge together.
    pub fn set_ready(&self, ready: bool) {
        self.inner.ready.store(ready, Ordering::Relaxed);
        self.inner.instrumentation.set_ready(ready);
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Relaxed)
    }
}

/// Service named by `metrics.presenter`, or none without a metrics section.
pub fn build_monitor(cfg: &HostConfig) -> Option<Arc<dyn MetricsService>> {
    let section = cfg.metrics.as_ref()?;
    match section.presenter() {
        Presenter::Prometheus => Some(Arc::new(PrometheusService::new())),
        Presenter::Null => Some(Arc::new(NullService::new())),
        Presenter::Unknown(p) => {
            tracing::warn!(presenter = %p, "unknown metrics presenter; running without metrics");
            None
        }
    }
}
