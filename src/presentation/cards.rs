use serde::Serialize;

use crate::domain::kpi::{ChangeType, KpiMetric, KpiSet};
use crate::format_utils::{
    format_change_rate, format_currency_with_unit, format_metric_value, format_number,
    format_percentage, format_progress,
};

/// Display strings for one KPI tile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub key: &'static str,
    pub title: &'static str,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

fn title_for(key: &str) -> &'static str {
    match key {
        "totalInvestment" => "총 투자액",
        "newCompanies" => "신규 기업",
        "employment" => "고용 창출",
        "salesRate" => "분양률",
        "renewableEnergy" => "재생에너지 용량",
        "complaints" => "민원 건수",
        _ => "",
    }
}

/// Tiles in display order
pub fn kpi_cards(kpis: &KpiSet) -> Vec<KpiCard> {
    kpis.metrics()
        .into_iter()
        .map(|(key, metric)| KpiCard {
            key,
            title: title_for(key),
            value: format_metric_value(metric),
            // `change` is already a percentage
            change: format_change_rate(metric.change / 100.0),
            change_type: metric.change_type,
            detail: detail_for(metric),
        })
        .collect()
}

fn detail_for(metric: &KpiMetric) -> Option<String> {
    if let (Some(target), Some(progress)) = (metric.target, metric.progress) {
        return Some(format!(
            "목표 {}{} 대비 {}",
            format_number(target),
            metric.unit,
            format_percentage(progress, false)
        ));
    }
    if let (Some(actual), Some(remaining)) = (metric.actual_value, metric.remaining_value) {
        return Some(format!(
            "집행 {} / 잔여 {} ({})",
            format_currency_with_unit(actual, &metric.unit),
            format_currency_with_unit(remaining, &metric.unit),
            format_progress(actual, metric.value)
        ));
    }
    None
}
