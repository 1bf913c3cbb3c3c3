use std::str::FromStr;

use strum::IntoEnumIterator;

use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::application::KpiDerivationService;
use crate::domain::{
    errors::AppError,
    kpi::KpiConfig,
    logging::LogComponent,
    sources::DataSource,
};
use crate::format_utils;
use crate::global_state::{
    DashboardSignals, dashboard_sources, investment_store, renewable_store, set_source_loading,
    traffic_store,
};
use crate::infrastructure::dto::{
    parse_investment_payload, parse_renewable_payload, parse_traffic_payload,
};
use crate::presentation::cards::kpi_cards;
use crate::{log_error, log_info, log_warn};

/// JS bridge: feeds the global source stores and reads derived KPIs.
/// No business logic lives here.
#[wasm_bindgen]
pub struct KpiDashboardApi {
    service: KpiDerivationService<DashboardSignals>,
}

#[wasm_bindgen]
impl KpiDashboardApi {
    /// Optional JSON config overriding the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<KpiDashboardApi, JsValue> {
        let config = match config_json {
            Some(json) => KpiConfig::from_json(&json).map_err(to_js_error)?,
            None => KpiConfig::default(),
        };
        Ok(Self { service: KpiDerivationService::with_config(dashboard_sources().clone(), config) })
    }

    /// Replace the investment records; returns how many were accepted
    #[wasm_bindgen(js_name = loadInvestments)]
    pub fn load_investments(&self, json: &str) -> Result<usize, JsValue> {
        let store = investment_store();
        match parse_investment_payload(json, self.service.config()) {
            Ok(records) => {
                let count = records.len();
                store.set_records(records);
                log_info!(LogComponent::Presentation("KpiDashboardApi"), "loaded {} investment records", count);
                Ok(count)
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("KpiDashboardApi"), "investment load failed: {}", e);
                store.fail(e.to_string());
                Err(to_js_error(e))
            }
        }
    }

    #[wasm_bindgen(js_name = loadRenewables)]
    pub fn load_renewables(&self, json: &str) -> Result<usize, JsValue> {
        let store = renewable_store();
        match parse_renewable_payload(json) {
            Ok(records) => {
                let count = records.len();
                store.set_records(records);
                log_info!(LogComponent::Presentation("KpiDashboardApi"), "loaded {} renewable records", count);
                Ok(count)
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("KpiDashboardApi"), "renewable load failed: {}", e);
                store.fail(e.to_string());
                Err(to_js_error(e))
            }
        }
    }

    #[wasm_bindgen(js_name = loadTraffic)]
    pub fn load_traffic(&self, json: &str) -> Result<usize, JsValue> {
        let store = traffic_store();
        match parse_traffic_payload(json) {
            Ok(records) => {
                let count = records.len();
                store.set_records(records);
                log_info!(LogComponent::Presentation("KpiDashboardApi"), "loaded {} traffic records", count);
                Ok(count)
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("KpiDashboardApi"), "traffic load failed: {}", e);
                store.fail(e.to_string());
                Err(to_js_error(e))
            }
        }
    }

    /// `source` is one of `investment`, `renewable`, `traffic`
    #[wasm_bindgen(js_name = setLoading)]
    pub fn set_loading(&self, source: &str, is_loading: bool) -> Result<(), JsValue> {
        set_source_loading(parse_source(source)?, is_loading);
        Ok(())
    }

    /// Last ingestion error of a source, if its latest load failed
    #[wasm_bindgen(js_name = sourceError)]
    pub fn source_error(&self, source: &str) -> Result<Option<String>, JsValue> {
        Ok(match parse_source(source)? {
            DataSource::Investment => investment_store().error(),
            DataSource::Renewable => renewable_store().error(),
            DataSource::Traffic => traffic_store().error(),
        })
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.service.is_loading()
    }

    /// KPI set as a plain JS object with camelCase keys
    #[wasm_bindgen(js_name = getKpiSet)]
    pub fn get_kpi_set(&self) -> Result<JsValue, JsValue> {
        let kpis = self.service.kpi_set();
        JsValue::from_serde(kpis.as_ref()).map_err(|e| to_js_error(AppError::from(e)))
    }

    /// Pre-formatted display strings for the six KPI tiles
    #[wasm_bindgen(js_name = getKpiCards)]
    pub fn get_kpi_cards(&self) -> Result<JsValue, JsValue> {
        let cards = kpi_cards(&self.service.kpi_set());
        JsValue::from_serde(&cards).map_err(|e| to_js_error(AppError::from(e)))
    }
}

#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(value: f64, is_decimal: Option<bool>) -> String {
    format_utils::format_percentage(value, is_decimal.unwrap_or(true))
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64) -> String {
    format_utils::format_currency(value)
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    format_utils::format_number(value)
}

#[wasm_bindgen(js_name = formatChangeRate)]
pub fn format_change_rate(value: f64) -> String {
    format_utils::format_change_rate(value)
}

#[wasm_bindgen(js_name = formatProgress)]
pub fn format_progress(current: f64, total: f64) -> String {
    format_utils::format_progress(current, total)
}

fn parse_source(source: &str) -> Result<DataSource, JsValue> {
    DataSource::from_str(source.trim()).map_err(|_| {
        log_warn!(LogComponent::Presentation("KpiDashboardApi"), "unknown data source '{}'", source);
        let known: Vec<String> = DataSource::iter().map(|s| s.to_string()).collect();
        JsValue::from_str(&format!("unknown data source '{}', expected one of: {}", source, known.join(", ")))
    })
}

fn to_js_error(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
