//! Host config loader (strict parsing).

pub mod schema;

use std::fs;

use chaind_core::error::{ChaindError, Result};

pub use schema::{HostConfig, MetricsSection};

/// Path used when neither an argument nor `CHAIND_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "chaind.yaml";

/// First CLI argument, else `CHAIND_CONFIG`, else [`DEFAULT_CONFIG_PATH`].
pub fn resolve_path(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<HostConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ChaindError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HostConfig> {
    let cfg: HostConfig = serde_yaml::from_str(s)
        .map_err(|e| ChaindError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
