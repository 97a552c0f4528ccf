//! Process gauges and their registration.
//!
//! `Instrumentation` is an owned context object: the host builds one at
//! startup, calls [`Instrumentation::ensure_registered`] once a metrics
//! service is known, and hands it (by reference or `Arc`) to whatever needs to
//! report the release or readiness. Update calls never fail; before a
//! successful registration they do nothing.
//!
//! Registration order is start time, release, ready. Each handle is retained
//! only once its own registration succeeded, so after a partial failure the
//! gauges that made it stay usable and a retry only attempts the missing ones.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use chaind_core::error::{ChaindError, RegistryError, Result};
use chaind_core::metrics::{Gauge, GaugeVec, Opts, Registry};

use crate::presenter::Presenter;
use crate::service::MetricsService;

/// Prefix of every metric name emitted here.
pub const METRICS_NAMESPACE: &str = "chaind";

const START_TIME: &str = "start_time_secs";
const RELEASE: &str = "release";
const READY: &str = "ready";

/// Outcome of the most recent `ensure_registered` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationState {
    #[default]
    Uninitialized,
    /// All gauges registered. Terminal.
    Registered,
    /// No service, a disabled presenter or an unknown one.
    Skipped,
    Failed,
}

#[derive(Debug, Default)]
pub struct Instrumentation {
    start_time: OnceLock<Gauge>,
    release: OnceLock<GaugeVec>,
    ready: OnceLock<Gauge>,
    state: Mutex<RegistrationState>,
}

fn registration(metric: &'static str) -> impl FnOnce(RegistryError) -> ChaindError {
    move |source| ChaindError::Registration { metric, source }
}

impl Instrumentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the process gauges with `monitor`.
    ///
    /// Returns immediately once a previous call registered everything.
    /// `None`, the `null` presenter and unknown presenters all succeed without
    /// registering anything. Calls are serialized, so concurrent first-time
    /// callers cannot both attempt registration.
    pub fn ensure_registered(&self, monitor: Option<&dyn MetricsService>) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == RegistrationState::Registered {
            return Ok(());
        }
        let Some(monitor) = monitor else {
            *state = RegistrationState::Skipped;
            return Ok(());
        };

        match Presenter::resolve(monitor.presenter()) {
            Presenter::Prometheus => {
                let Some(registry) = monitor.registry() else {
                    tracing::warn!(presenter = %Presenter::Prometheus, "metrics service has no registry; no metrics will be generated for this module");
                    *state = RegistrationState::Skipped;
                    return Ok(());
                };
                match self.register_prometheus(registry) {
                    Ok(()) => {
                        tracing::info!(namespace = METRICS_NAMESPACE, "process metrics registered");
                        *state = RegistrationState::Registered;
                        Ok(())
                    }
                    Err(e) => {
                        *state = RegistrationState::Failed;
                        Err(e)
                    }
                }
            }
            Presenter::Null => {
                tracing::debug!("no metrics will be generated for this module");
                *state = RegistrationState::Skipped;
                Ok(())
            }
            Presenter::Unknown(p) => {
                tracing::debug!(presenter = %p, "unrecognised metrics presenter; no metrics will be generated for this module");
                *state = RegistrationState::Skipped;
                Ok(())
            }
        }
    }

    // Caller holds the state lock, so the `OnceLock::set` calls cannot race.
    fn register_prometheus(&self, registry: &Registry) -> Result<()> {
        if self.start_time.get().is_none() {
            let start_time = Gauge::new(
                Opts::new(START_TIME, "The timestamp at which this instance started.")
                    .namespace(METRICS_NAMESPACE),
            )
            .map_err(registration(START_TIME))?;
            registry
                .register(Arc::new(start_time.clone()))
                .map_err(registration(START_TIME))?;
            start_time.set_to_current_time();
            let _ = self.start_time.set(start_time);
        }

        if self.release.get().is_none() {
            let release = GaugeVec::new(
                Opts::new(RELEASE, "The release of this instance.").namespace(METRICS_NAMESPACE),
                &["version"],
            )
            .map_err(registration(RELEASE))?;
            registry
                .register(Arc::new(release.clone()))
                .map_err(registration(RELEASE))?;
            let _ = self.release.set(release);
        }

        if self.ready.get().is_none() {
            let ready = Gauge::new(
                Opts::new(READY, "1 if ready to serve requests, otherwise 0.")
                    .namespace(METRICS_NAMESPACE),
            )
            .map_err(registration(READY))?;
            registry
                .register(Arc::new(ready.clone()))
                .map_err(registration(READY))?;
            let _ = self.ready.set(ready);
        }

        Ok(())
    }

    /// Mark `version` as the running release.
    ///
    /// Earlier versions keep their series at 1; the release gauge is expected
    /// to be set once per process.
    pub fn set_release(&self, version: &str) {
        let Some(release) = self.release.get() else { return; };
        release.set(&[version], 1.0);
    }

    pub fn set_ready(&self, ready: bool) {
        let Some(gauge) = self.ready.get() else { return; };
        gauge.set(if ready { 1.0 } else { 0.0 });
    }

    pub fn state(&self) -> RegistrationState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_registered(&self) -> bool {
        self.state() == RegistrationState::Registered
    }

    /// Value recorded by the start-time gauge, if it was registered.
    pub fn start_time_secs(&self) -> Option<f64> {
        self.start_time.get().map(Gauge::get)
    }
}
