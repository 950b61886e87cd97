use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DIGITS, DEFAULT_SIGNIFICANCE, YEAST_CHROMOSOMES};
use crate::errors::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

///
/// Settings shared by the reconciliation commands. Every field has a default,
/// so a TOML file only needs the keys it wants to change:
///
/// ```toml
/// significance_threshold = 0.01
/// chromosomes = ["I", "II", "III"]
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Calls are kept only when `eval1` is strictly below this value.
    pub significance_threshold: f64,
    /// Reduce contig names like `x1156_PM_chrIV` to `IV` on ingestion.
    pub strip_chr_prefix: bool,
    /// Decimal places kept when averaging several calls in one window.
    pub digits: u32,
    /// Chromosomes visited by the windowed aggregation, in output order.
    pub chromosomes: Vec<String>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        ReconcileConfig {
            significance_threshold: DEFAULT_SIGNIFICANCE,
            strip_chr_prefix: true,
            digits: DEFAULT_DIGITS,
            chromosomes: YEAST_CHROMOSOMES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ReconcileConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let t = self.significance_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(ConfigError::InvalidThreshold(t));
        }
        if self.chromosomes.is_empty() {
            return Err(ConfigError::EmptyChromosomeOrder);
        }
        Ok(())
    }
}

impl TryFrom<&Path> for ReconcileConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: ReconcileConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
