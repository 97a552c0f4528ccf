use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RegistryError;

use super::desc::{Desc, Opts};
use super::registry::{Collector, Sample};

/// f64 stored as its bit pattern.
#[derive(Debug, Default)]
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Relaxed);
    }
}

/// Seconds since the Unix epoch, fractional part kept.
fn now_unix_secs() -> f64 {
    // A clock before 1970 reads as 0.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Single-valued gauge. Clones share the same value.
#[derive(Debug, Clone)]
pub struct Gauge {
    desc: Arc<Desc>,
    value: Arc<AtomicF64>,
}

impl Gauge {
    pub fn new(opts: Opts) -> Result<Self, RegistryError> {
        let desc = Desc::new(&opts, &[])?;
        Ok(Self {
            desc: Arc::new(desc),
            value: Arc::new(AtomicF64::default()),
        })
    }

    pub fn set(&self, v: f64) {
        self.value.store(v);
    }

    pub fn get(&self) -> f64 {
        self.value.load()
    }

    pub fn set_to_current_time(&self) {
        self.set(now_unix_secs());
    }
}

impl Collector for Gauge {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn collect(&self) -> Vec<Sample> {
        vec![Sample {
            labels: Vec::new(),
            value: self.get(),
        }]
    }
}

/// One series of a [`GaugeVec`].
#[derive(Debug, Clone)]
pub struct GaugeChild {
    value: Arc<AtomicF64>,
}

impl GaugeChild {
    pub fn set(&self, v: f64) {
        self.value.store(v);
    }

    pub fn get(&self) -> f64 {
        self.value.load()
    }
}

/// Gauge family keyed by label values, in descriptor label order.
#[derive(Debug, Clone)]
pub struct GaugeVec {
    desc: Arc<Desc>,
    map: Arc<DashMap<Vec<String>, GaugeChild>>,
}

impl GaugeVec {
    pub fn new(opts: Opts, label_names: &[&str]) -> Result<Self, RegistryError> {
        let desc = Desc::new(&opts, label_names)?;
        Ok(Self {
            desc: Arc::new(desc),
            map: Arc::new(DashMap::new()),
        })
    }

    fn check_arity(&self, label_values: &[&str]) -> Result<(), RegistryError> {
        let expected = self.desc.label_names().len();
        if label_values.len() != expected {
            return Err(RegistryError::InconsistentCardinality {
                expected,
                got: label_values.len(),
            });
        }
        Ok(())
    }

    /// Series for `label_values`, created at 0 on first use.
    pub fn try_with_label_values(&self, label_values: &[&str]) -> Result<GaugeChild, RegistryError> {
        self.check_arity(label_values)?;
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        let child = self
            .map
            .entry(key)
            .or_insert_with(|| GaugeChild {
                value: Arc::new(AtomicF64::default()),
            })
            .clone();
        Ok(child)
    }

    /// Infallible setter: a label arity mismatch is logged and dropped.
    pub fn set(&self, label_values: &[&str], v: f64) {
        match self.try_with_label_values(label_values) {
            Ok(child) => child.set(v),
            Err(e) => {
                tracing::debug!(metric = %self.desc.fq_name(), error = %e, "gauge update dropped");
            }
        }
    }

    /// Current value of a series, `None` if it was never touched.
    pub fn get(&self, label_values: &[&str]) -> Option<f64> {
        self.check_arity(label_values).ok()?;
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        self.map.get(&key).map(|c| c.get())
    }

    /// Drop a series. Returns whether it existed.
    pub fn remove(&self, label_values: &[&str]) -> bool {
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        self.map.remove(&key).is_some()
    }
}

impl Collector for GaugeVec {
    fn desc(&self) -> &Desc {
        &self.desc
    }

    fn collect(&self) -> Vec<Sample> {
        let names = self.desc.label_names();
        let mut samples: Vec<Sample> = self
            .map
            .iter()
            .map(|r| Sample {
                labels: names
                    .iter()
                    .cloned()
                    .zip(r.key().iter().cloned())
                    .collect(),
                value: r.value().get(),
            })
            .collect();
        samples.sort_by(|a, b| a.labels.cmp(&b.labels));
        samples
    }
}
