use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// Direction of a KPI trend
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
    #[default]
    Neutral,
}

/// Dead band around zero inside which a change is not treated as a trend.
/// Both thresholds are non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeThresholds {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for ChangeThresholds {
    fn default() -> Self {
        Self { positive_threshold: 0.005, negative_threshold: 0.005 }
    }
}

impl ChangeThresholds {
    pub fn new(positive_threshold: f64, negative_threshold: f64) -> Self {
        Self { positive_threshold, negative_threshold }
    }

    /// `Increase` above `+positive_threshold`, `Decrease` below
    /// `-negative_threshold`, `Neutral` on the closed band in between
    /// (and for NaN).
    pub fn classify(&self, change: f64) -> ChangeType {
        if change > self.positive_threshold {
            ChangeType::Increase
        } else if change < -self.negative_threshold {
            ChangeType::Decrease
        } else {
            ChangeType::Neutral
        }
    }
}

/// One headline indicator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetric {
    pub value: f64,
    pub unit: String,
    pub change: f64,
    pub change_type: ChangeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_value: Option<f64>,
}

impl KpiMetric {
    /// Metric with `change` rounded to 2 decimals and classified.
    pub fn new(value: f64, unit: &str, change: f64, thresholds: &ChangeThresholds) -> Self {
        let change = round_to_cents(change);
        Self {
            value,
            unit: unit.to_string(),
            change,
            change_type: thresholds.classify(change),
            ..Default::default()
        }
    }

    /// All-zero metric used while any source is loading
    pub fn zero(unit: &str) -> Self {
        Self { unit: unit.to_string(), ..Default::default() }
    }

    pub fn with_target(mut self, target: f64, progress: f64) -> Self {
        self.target = Some(target);
        self.progress = Some(progress);
        self
    }

    pub fn with_split(mut self, actual_value: f64, remaining_value: f64) -> Self {
        self.actual_value = Some(actual_value);
        self.remaining_value = Some(remaining_value);
        self
    }
}

/// The six dashboard KPI slots. Always complete; rebuilt, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_investment: KpiMetric,
    pub new_companies: KpiMetric,
    pub employment: KpiMetric,
    pub sales_rate: KpiMetric,
    pub renewable_energy: KpiMetric,
    pub complaints: KpiMetric,
}

impl KpiSet {
    /// Slots in display order, keyed by their camelCase names
    pub fn metrics(&self) -> [(&'static str, &KpiMetric); 6] {
        [
            ("totalInvestment", &self.total_investment),
            ("newCompanies", &self.new_companies),
            ("employment", &self.employment),
            ("salesRate", &self.sales_rate),
            ("renewableEnergy", &self.renewable_energy),
            ("complaints", &self.complaints),
        ]
    }
}

/// Round to 2 decimal digits, half away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
