use super::MetricsService;
use crate::presenter::Presenter;

/// Backend that produces no metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullService;

impl NullService {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsService for NullService {
    fn presenter(&self) -> &str {
        Presenter::NULL
    }
}
