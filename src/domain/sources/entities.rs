pub use super::value_objects::{Amount, Megawatts, ProjectStatus, Progress};
use serde::{Deserialize, Serialize};

/// Domain entity - one announced investment project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: String,
    pub company: String,
    pub sector: String,
    pub amount: Amount,
    pub expected_jobs: u32,
    pub progress: Progress,
    pub status: ProjectStatus,
    pub location: String,
    pub start_date: String,
}

impl InvestmentRecord {
    pub fn new(id: impl Into<String>, amount: f64, expected_jobs: u32, progress: f64) -> Self {
        Self {
            id: id.into(),
            amount: Amount::new(amount),
            expected_jobs,
            progress: Progress::from_fraction(progress),
            ..Default::default()
        }
    }

    /// More than half way to completion
    pub fn is_substantially_advanced(&self) -> bool {
        self.progress.value() > 0.5
    }
}

/// Domain entity - one renewable generation site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewableRecord {
    pub id: String,
    pub capacity: Megawatts,
    pub generation_type: Option<String>,
}

impl RenewableRecord {
    pub fn new(id: impl Into<String>, capacity_mw: f64) -> Self {
        Self { id: id.into(), capacity: Megawatts::new(capacity_mw), generation_type: None }
    }

    pub fn with_generation_type(mut self, generation_type: impl Into<String>) -> Self {
        self.generation_type = Some(generation_type.into());
        self
    }
}

/// Domain entity - one traffic counting point. Not used by any KPI; the traffic
/// source only takes part in the combined loading flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRecord {
    pub id: String,
    pub location: String,
    pub vehicle_count: u64,
}
