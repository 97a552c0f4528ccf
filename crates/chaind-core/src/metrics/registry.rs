use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt::Write;
use std::sync::Arc;

use crate::error::RegistryError;

use super::desc::Desc;

/// One exported value with its `(label, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub labels: Vec<(String, String)>,
    pub value: f64,
}

/// Snapshot of one registered collector.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub samples: Vec<Sample>,
}

/// Anything the registry can expose. Implemented by the gauge types.
pub trait Collector: Send + Sync {
    fn desc(&self) -> &Desc;
    fn collect(&self) -> Vec<Sample>;
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v == f64::INFINITY {
        "+Inf".into()
    } else if v == f64::NEG_INFINITY {
        "-Inf".into()
    } else {
        v.to_string()
    }
}

/// Collectors keyed by fully-qualified name.
#[derive(Default)]
pub struct Registry {
    collectors: DashMap<String, Arc<dyn Collector>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            collectors: DashMap::new(),
        }
    }

    /// Register a collector. A name that is already taken is rejected and the
    /// existing collector stays in place.
    pub fn register(&self, collector: Arc<dyn Collector>) -> Result<(), RegistryError> {
        let name = collector.desc().fq_name().to_string();
        match self.collectors.entry(name) {
            Entry::Occupied(e) => Err(RegistryError::AlreadyRegistered(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::trace!(metric = %e.key(), "collector registered");
                e.insert(collector);
                Ok(())
            }
        }
    }

    pub fn unregister(&self, fq_name: &str) -> bool {
        self.collectors.remove(fq_name).is_some()
    }

    pub fn contains(&self, fq_name: &str) -> bool {
        self.collectors.contains_key(fq_name)
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Snapshot of every collector, sorted by name.
    pub fn gather(&self) -> Vec<MetricFamily> {
        let mut out: Vec<MetricFamily> = self
            .collectors
            .iter()
            .map(|r| {
                let c = r.value();
                MetricFamily {
                    name: c.desc().fq_name().to_string(),
                    help: c.desc().help().to_string(),
                    samples: c.collect(),
                }
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Value of the series of `fq_name` whose labels equal `labels`
    /// (order-insensitive).
    pub fn value(&self, fq_name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        let c = self.collectors.get(fq_name)?;
        let mut want: Vec<(&str, &str)> = labels.to_vec();
        want.sort();
        c.collect()
            .into_iter()
            .find(|s| {
                let mut have: Vec<(&str, &str)> = s
                    .labels
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                have.sort();
                have == want
            })
            .map(|s| s.value)
    }

    /// Render in Prometheus text exposition format (0.0.4).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for fam in self.gather() {
            let _ = writeln!(out, "# HELP {} {}", fam.name, escape_help(&fam.help));
            let _ = writeln!(out, "# TYPE {} gauge", fam.name);
            for s in &fam.samples {
                if s.labels.is_empty() {
                    let _ = writeln!(out, "{} {}", fam.name, fmt_value(s.value));
                } else {
                    let label_str = s
                        .labels
                        .iter()
                        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                        .collect::<Vec<_>>()
                        .join(",");
                    let _ = writeln!(out, "{}{{{}}} {}", fam.name, label_str, fmt_value(s.value));
                }
            }
        }
        out
    }
}
