//! Presenter resolution.
//!
//! A metrics service names its exposition backend with a string. The string
//! is resolved once into a closed set; anything unrecognised lands in
//! `Unknown` and is handled explicitly by the registrar (no registration, no
//! error).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presenter {
    /// Pull-based Prometheus exposition.
    Prometheus,
    /// Metrics disabled.
    Null,
    Unknown(String),
}

impl Presenter {
    pub const PROMETHEUS: &'static str = "prometheus";
    pub const NULL: &'static str = "null";

    /// Exact, case-sensitive match.
    pub fn resolve(s: &str) -> Self {
        match s {
            Self::PROMETHEUS => Presenter::Prometheus,
            Self::NULL => Presenter::Null,
            other => Presenter::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Presenter::Prometheus => Self::PROMETHEUS,
            Presenter::Null => Self::NULL,
            Presenter::Unknown(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
