//! Data transfer objects for the upstream feeds.
//!
//! Upstream payloads are loosely typed: numbers arrive as JSON numbers, as
//! strings with thousands separators, as `null`, or not at all. Everything is
//! normalised here so that domain records never carry a "maybe present" field.

use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::domain::{
    errors::{AppError, KpiResult},
    kpi::{
        KpiConfig,
        calculators::{extract_amount_from_free_text, sector_for_index},
    },
    logging::LogComponent,
    sources::{
        Amount, InvestmentRecord, Megawatts, ProjectStatus, Progress, RenewableRecord,
        TrafficRecord,
    },
};
use crate::log_warn;

/// Keys under which wrapped payloads carry their record array
const PAYLOAD_ARRAY_KEYS: [&str; 3] = ["items", "data", "records"];

/// DTO for one investment project
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentDto {
    #[serde(alias = "projectId")]
    pub id: Option<Value>,
    #[serde(alias = "companyName")]
    pub company: Option<Value>,
    pub sector: Option<Value>,
    #[serde(alias = "investmentAmount")]
    pub amount: Option<Value>,
    #[serde(alias = "jobs")]
    pub expected_jobs: Option<Value>,
    pub progress: Option<Value>,
    pub status: Option<Value>,
    pub location: Option<Value>,
    pub start_date: Option<Value>,
    pub description: Option<Value>,
}

impl InvestmentDto {
    /// Convert to a domain record. `index` is the record's position in its
    /// payload and only drives the fallback sector label.
    pub fn to_domain_record(&self, index: usize, config: &KpiConfig) -> InvestmentRecord {
        let id = text(self.id.as_ref());

        let amount = match number(self.amount.as_ref()) {
            Some(raw) => {
                if raw < 0.0 {
                    log_warn!(
                        LogComponent::Infrastructure("Ingestion"),
                        "investment {}: negative amount {} clamped to 0",
                        id,
                        raw
                    );
                }
                Amount::new(raw)
            }
            None => Amount::new(extract_amount_from_free_text(&text(self.description.as_ref()))),
        };

        let expected_jobs = match number(self.expected_jobs.as_ref()) {
            Some(raw) if raw < 0.0 => {
                log_warn!(
                    LogComponent::Infrastructure("Ingestion"),
                    "investment {}: negative job count {} clamped to 0",
                    id,
                    raw
                );
                0
            }
            Some(raw) => raw.round().min(u32::MAX as f64) as u32,
            None => 0,
        };

        let progress = match percent_or_number(self.progress.as_ref()) {
            Some(raw) => {
                if !(0.0..=100.0).contains(&raw) {
                    log_warn!(
                        LogComponent::Infrastructure("Ingestion"),
                        "investment {}: progress {} outside the valid range, clamped",
                        id,
                        raw
                    );
                }
                Progress::normalize(raw)
            }
            None => Progress::NONE,
        };

        let sector = match text(self.sector.as_ref()) {
            s if s.trim().is_empty() => sector_for_index(index, &config.fallback_sectors).to_string(),
            s => s,
        };

        InvestmentRecord {
            company: text(self.company.as_ref()),
            sector,
            amount,
            expected_jobs,
            progress,
            status: parse_status(&text(self.status.as_ref())),
            location: text(self.location.as_ref()),
            start_date: text(self.start_date.as_ref()),
            id,
        }
    }
}

/// DTO for one renewable generation site
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenewableDto {
    pub id: Option<Value>,
    #[serde(alias = "capacityMw", alias = "generationCapacity")]
    pub capacity: Option<Value>,
    #[serde(alias = "type")]
    pub generation_type: Option<Value>,
}

impl RenewableDto {
    pub fn to_domain_record(&self) -> RenewableRecord {
        let id = text(self.id.as_ref());
        let capacity = match number(self.capacity.as_ref()) {
            Some(raw) => {
                if raw < 0.0 {
                    log_warn!(
                        LogComponent::Infrastructure("Ingestion"),
                        "renewable {}: negative capacity {} clamped to 0",
                        id,
                        raw
                    );
                }
                Megawatts::new(raw)
            }
            None => Megawatts::default(),
        };
        let generation_type = Some(text(self.generation_type.as_ref())).filter(|t| !t.is_empty());
        RenewableRecord { id, capacity, generation_type }
    }
}

/// DTO for one traffic counting point
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrafficDto {
    pub id: Option<Value>,
    #[serde(alias = "roadName")]
    pub location: Option<Value>,
    #[serde(alias = "volume", alias = "trafficVolume")]
    pub vehicle_count: Option<Value>,
}

impl TrafficDto {
    pub fn to_domain_record(&self) -> TrafficRecord {
        TrafficRecord {
            id: text(self.id.as_ref()),
            location: text(self.location.as_ref()),
            vehicle_count: number(self.vehicle_count.as_ref())
                .map(|v| v.max(0.0).round() as u64)
                .unwrap_or(0),
        }
    }
}

pub fn parse_investment_payload(json: &str, config: &KpiConfig) -> KpiResult<Vec<InvestmentRecord>> {
    Ok(parse_items::<InvestmentDto>(json, "investment")?
        .into_iter()
        .map(|(index, dto)| dto.to_domain_record(index, config))
        .collect())
}

pub fn parse_renewable_payload(json: &str) -> KpiResult<Vec<RenewableRecord>> {
    Ok(parse_items::<RenewableDto>(json, "renewable")?
        .into_iter()
        .map(|(_, dto)| dto.to_domain_record())
        .collect())
}

pub fn parse_traffic_payload(json: &str) -> KpiResult<Vec<TrafficRecord>> {
    Ok(parse_items::<TrafficDto>(json, "traffic")?
        .into_iter()
        .map(|(_, dto)| dto.to_domain_record())
        .collect())
}

/// Accepts a bare array or an object wrapping one. Items that are not
/// objects are skipped, keeping their original index for the survivors.
fn parse_items<D>(json: &str, source: &str) -> KpiResult<Vec<(usize, D)>>
where
    D: for<'de> Deserialize<'de>,
{
    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        Value::Object(mut map) => PAYLOAD_ARRAY_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| {
                AppError::IngestionError(format!(
                    "{} payload object has no {} array",
                    source,
                    PAYLOAD_ARRAY_KEYS.join("/")
                ))
            })?,
        other => {
            return Err(AppError::IngestionError(format!(
                "{} payload must be an array or object, got {}",
                source,
                json_kind(&other)
            )));
        }
    };

    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<D>(item) {
            Ok(dto) => parsed.push((index, dto)),
            Err(e) => {
                log_warn!(
                    LogComponent::Infrastructure("Ingestion"),
                    "{} item #{} skipped: {}",
                    source,
                    index,
                    e
                );
            }
        }
    }
    Ok(parsed)
}

/// Status strings in English (kebab/snake/space separated) or Korean.
/// Unknown or missing values fall back to `Planning`.
pub fn parse_status(raw: &str) -> ProjectStatus {
    let normalized = raw.trim().to_lowercase().replace(['_', ' '], "-");
    if let Ok(status) = ProjectStatus::from_str(&normalized) {
        return status;
    }
    match normalized.as_str() {
        "계획" | "계획중" | "계획-중" => ProjectStatus::Planning,
        "진행중" | "진행-중" | "추진중" | "추진-중" => ProjectStatus::InProgress,
        "완료" => ProjectStatus::Completed,
        "지연" => ProjectStatus::Delayed,
        _ => ProjectStatus::Planning,
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Like [`number`] but also accepts a trailing `%` on strings
fn percent_or_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.trim().trim_end_matches('%').replace(',', "").trim().parse::<f64>().ok(),
        other => number(Some(other)),
    }
    .filter(|v| v.is_finite())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
