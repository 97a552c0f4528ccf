use std::net::SocketAddr;

use serde::Deserialize;
use chaind_core::error::{ChaindError, Result};

use crate::presenter::Presenter;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default = "default_listen")]
    pub listen: String,

    /// Absent means no metrics service at all.
    #[serde(default)]
    pub metrics: Option<MetricsSection>,

    /// Overrides the crate version reported by the release gauge.
    #[serde(default)]
    pub release: Option<String>,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChaindError::UnsupportedVersion);
        }
        self.listen_addr()?;
        if let Some(m) = &self.metrics {
            m.validate()?;
        }
        if matches!(&self.release, Some(r) if r.trim().is_empty()) {
            return Err(ChaindError::BadConfig("release must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| ChaindError::BadConfig(format!("listen must be a valid SocketAddr: {e}")))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    pub presenter: String,
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        match Presenter::resolve(&self.presenter) {
            Presenter::Unknown(p) => Err(ChaindError::BadConfig(format!(
                "metrics.presenter must be \"prometheus\" or \"null\", got {p:?}"
            ))),
            _ => Ok(()),
        }
    }

    pub fn presenter(&self) -> Presenter {
        Presenter::resolve(&self.presenter)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
