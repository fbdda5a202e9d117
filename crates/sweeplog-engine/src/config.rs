//! Configuration for report rendering

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Vacuum bag capacity, in square feet, before replacement is recommended
pub const DEFAULT_BAG_CAPACITY_SQ_FT: u64 = 5280;

/// Settings that shape the rendered reports
///
/// The defaults reproduce the canonical report text exactly.
///
/// # Examples
///
/// ```
/// use sweeplog_engine::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.bag_capacity_sq_ft, 5280);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Square feet a vacuum bag can take before it is overdue
    /// Default: 5280
    #[serde(default = "default_bag_capacity")]
    pub bag_capacity_sq_ft: u64,
}

fn default_bag_capacity() -> u64 {
    DEFAULT_BAG_CAPACITY_SQ_FT
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bag_capacity_sq_ft: DEFAULT_BAG_CAPACITY_SQ_FT,
        }
    }
}

impl ReportConfig {
    /// Check the configuration for values no report can use
    pub fn validate(&self) -> Result<()> {
        if self.bag_capacity_sq_ft == 0 {
            return Err(EngineError::Config(
                "bag_capacity_sq_ft must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.bag_capacity_sq_ft, 5280);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ReportConfig { bag_capacity_sq_ft: 0 };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_toml_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());

        let config: ReportConfig = toml::from_str("bag_capacity_sq_ft = 1000").unwrap();
        assert_eq!(config.bag_capacity_sq_ft, 1000);
    }
}
