use serde::{Deserialize, Serialize};

use super::value_objects::ChangeThresholds;
use crate::domain::errors::{AppError, KpiResult};

pub const DEFAULT_AMOUNT_UNIT: &str = "억원";

/// Tunables of the KPI engine. Every field has a default, so a JSON document
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KpiConfig {
    pub thresholds: ChangeThresholds,
    pub amount_unit: String,
    /// Lower bound of the employment target
    pub employment_floor: f64,
    /// Jobs expected per unit of committed capital
    pub employment_ratio: f64,
    /// Round-robin labels for records that arrive without a sector
    pub fallback_sectors: Vec<String>,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            thresholds: ChangeThresholds::default(),
            amount_unit: DEFAULT_AMOUNT_UNIT.to_string(),
            employment_floor: 1000.0,
            employment_ratio: 0.8,
            fallback_sectors: ["제조업", "에너지", "정보통신", "바이오", "물류", "서비스업"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl KpiConfig {
    pub fn from_json(json: &str) -> KpiResult<Self> {
        let config: KpiConfig = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigurationError(format!("invalid KPI config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KpiResult<()> {
        let ChangeThresholds { positive_threshold, negative_threshold } = self.thresholds;
        for (name, value) in [("positiveThreshold", positive_threshold), ("negativeThreshold", negative_threshold)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !self.employment_floor.is_finite() || self.employment_floor <= 0.0 {
            return Err(AppError::ConfigurationError(format!(
                "employmentFloor must be positive, got {}",
                self.employment_floor
            )));
        }
        if !self.employment_ratio.is_finite() || self.employment_ratio < 0.0 {
            return Err(AppError::ConfigurationError(format!(
                "employmentRatio must be a finite non-negative number, got {}",
                self.employment_ratio
            )));
        }
        if self.fallback_sectors.is_empty() {
            return Err(AppError::ConfigurationError(
                "fallbackSectors must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
