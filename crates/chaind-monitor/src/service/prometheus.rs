use chaind_core::metrics::Registry;

use super::MetricsService;
use crate::presenter::Presenter;

/// Pull-based backend: collectors live in an in-process registry which the
/// `/metrics` handler renders on scrape.
#[derive(Default)]
pub struct PrometheusService {
    registry: Registry,
}

impl PrometheusService {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Prometheus text exposition of everything registered so far.
    pub fn render(&self) -> String {
        self.registry.render()
    }
}

impl MetricsService for PrometheusService {
    fn presenter(&self) -> &str {
        Presenter::PROMETHEUS
    }

    fn registry(&self) -> Option<&Registry> {
        Some(&self.registry)
    }
}
