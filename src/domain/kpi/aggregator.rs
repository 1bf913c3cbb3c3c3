use super::calculators::{
    advanced_project_count, average_progress, total_employment, total_investment,
    total_renewable_capacity,
};
use super::config::KpiConfig;
use super::value_objects::{KpiMetric, KpiSet};
use crate::domain::logging::LogComponent;
use crate::domain::sources::{InvestmentRecord, RenewableRecord};
use crate::log_debug;

pub const COMPANY_UNIT: &str = "개";
pub const EMPLOYMENT_UNIT: &str = "명";
pub const SALES_RATE_UNIT: &str = "%";
pub const CAPACITY_UNIT: &str = "MW";
pub const COMPLAINT_UNIT: &str = "건";

/// Everything one KPI derivation reads
#[derive(Debug, Clone, Copy)]
pub struct KpiInputs<'a> {
    pub investments: &'a [InvestmentRecord],
    pub renewables: &'a [RenewableRecord],
    pub is_loading: bool,
}

impl<'a> KpiInputs<'a> {
    pub fn new(
        investments: &'a [InvestmentRecord],
        renewables: &'a [RenewableRecord],
        is_loading: bool,
    ) -> Self {
        Self { investments, renewables, is_loading }
    }
}

/// Domain service turning source records into the six-slot [`KpiSet`].
///
/// Several slots are proxies (sales rate, complaints, and the trend of new
/// companies and renewable capacity) computed deterministically from progress
/// and capacity tiers. A slot whose source collection is empty resolves to
/// the zero metric instead of a proxy value.
#[derive(Debug, Clone, Default)]
pub struct KpiAggregator {
    config: KpiConfig,
}

impl KpiAggregator {
    pub fn new(config: KpiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KpiConfig {
        &self.config
    }

    pub fn derive(&self, inputs: &KpiInputs<'_>) -> KpiSet {
        if inputs.is_loading {
            log_debug!(LogComponent::Domain("KpiAggregator"), "sources still loading, emitting zero KPI set");
            return self.loading_state();
        }

        let investments = inputs.investments;
        let total = total_investment(investments);
        let avg_progress = average_progress(investments);

        log_debug!(
            LogComponent::Domain("KpiAggregator"),
            "deriving KPIs from {} investments and {} renewable sites (avg progress {:.3})",
            investments.len(),
            inputs.renewables.len(),
            avg_progress
        );

        KpiSet {
            total_investment: self.total_investment_metric(total, avg_progress),
            new_companies: self.new_companies_metric(investments),
            employment: self.employment_metric(investments, total, avg_progress),
            sales_rate: self.sales_rate_metric(investments, avg_progress),
            renewable_energy: self.renewable_metric(inputs.renewables),
            complaints: self.complaints_metric(investments, total, avg_progress),
        }
    }

    /// Zero KPI set emitted while any source is loading
    pub fn loading_state(&self) -> KpiSet {
        KpiSet {
            total_investment: KpiMetric::zero(&self.config.amount_unit).with_split(0.0, 0.0),
            new_companies: KpiMetric::zero(COMPANY_UNIT),
            employment: KpiMetric::zero(EMPLOYMENT_UNIT).with_target(0.0, 0.0),
            sales_rate: KpiMetric::zero(SALES_RATE_UNIT),
            renewable_energy: KpiMetric::zero(CAPACITY_UNIT),
            complaints: KpiMetric::zero(COMPLAINT_UNIT),
        }
    }

    fn total_investment_metric(&self, total: f64, avg_progress: f64) -> KpiMetric {
        let actual = (total * avg_progress).round();
        let remaining = (total * (1.0 - avg_progress)).round();
        KpiMetric::new(total, &self.config.amount_unit, avg_progress * 100.0, &self.config.thresholds)
            .with_split(actual, remaining)
    }

    fn new_companies_metric(&self, investments: &[InvestmentRecord]) -> KpiMetric {
        if investments.is_empty() {
            return KpiMetric::zero(COMPANY_UNIT);
        }
        let count = investments.len() as f64;
        let advanced_share = advanced_project_count(investments) as f64 / count;
        KpiMetric::new(count, COMPANY_UNIT, advanced_share * 20.0, &self.config.thresholds)
    }

    fn employment_metric(&self, investments: &[InvestmentRecord], total: f64, avg_progress: f64) -> KpiMetric {
        let jobs = total_employment(investments) as f64;
        let target = self.config.employment_floor.max((total * self.config.employment_ratio).round());
        let progress = if target > 0.0 { (jobs / target * 100.0).round().min(100.0) } else { 0.0 };
        KpiMetric::new(jobs, EMPLOYMENT_UNIT, avg_progress * 150.0, &self.config.thresholds)
            .with_target(target, progress)
    }

    fn sales_rate_metric(&self, investments: &[InvestmentRecord], avg_progress: f64) -> KpiMetric {
        if investments.is_empty() {
            return KpiMetric::zero(SALES_RATE_UNIT);
        }
        let rate = (50.0 + avg_progress * 40.0).clamp(50.0, 90.0);
        KpiMetric::new(rate, SALES_RATE_UNIT, avg_progress * 60.0, &self.config.thresholds)
    }

    fn renewable_metric(&self, renewables: &[RenewableRecord]) -> KpiMetric {
        if renewables.is_empty() {
            return KpiMetric::zero(CAPACITY_UNIT);
        }
        let capacity = total_renewable_capacity(renewables);
        KpiMetric::new(capacity, CAPACITY_UNIT, capacity_tier_change(capacity), &self.config.thresholds)
    }

    fn complaints_metric(&self, investments: &[InvestmentRecord], total: f64, avg_progress: f64) -> KpiMetric {
        if investments.is_empty() {
            return KpiMetric::zero(COMPLAINT_UNIT);
        }
        let complaints = (8.0 - (total / 1000.0).floor()).clamp(1.0, 10.0);
        let change = if avg_progress > 0.5 { -20.0 } else { -5.0 };
        KpiMetric::new(complaints, COMPLAINT_UNIT, change, &self.config.thresholds)
    }
}

/// Coarse capacity tiers standing in for a year-over-year delta
fn capacity_tier_change(capacity_mw: f64) -> f64 {
    if capacity_mw > 1000.0 {
        25.0
    } else if capacity_mw > 500.0 {
        15.0
    } else {
        8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_tiers_are_exclusive() {
        assert_eq!(capacity_tier_change(1000.0), 15.0);
        assert_eq!(capacity_tier_change(1000.1), 25.0);
        assert_eq!(capacity_tier_change(500.0), 8.0);
        assert_eq!(capacity_tier_change(0.0), 8.0);
    }
}
