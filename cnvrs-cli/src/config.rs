use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use cnvrs_core::config::ReconcileConfig;

///
/// Settings from `--config` when given, defaults otherwise. Flags of the
/// individual subcommands override the result.
///
pub fn load_config(path: Option<&String>) -> Result<ReconcileConfig> {
    match path {
        Some(p) => {
            debug!("Loading settings from {}", p);
            ReconcileConfig::try_from(Path::new(p))
                .with_context(|| format!("Failed to load config file: {}", p))
        }
        None => Ok(ReconcileConfig::default()),
    }
}
