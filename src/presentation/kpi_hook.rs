use std::sync::Arc;

use leptos::*;

use crate::application::{KpiDerivationService, KpiReading};
use crate::domain::{
    kpi::{KpiConfig, KpiSet},
    sources::SnapshotProvider,
};

/// Reactive view of the dashboard KPIs
#[derive(Clone, Copy)]
pub struct KpiHandle {
    pub kpis: Signal<Arc<KpiSet>>,
    pub is_loading: Signal<bool>,
    pub has_error: Signal<bool>,
}

/// Derive the KPI set reactively from `provider`.
///
/// The provider's reads are tracked, so the memo reruns whenever a source
/// store changes; the derivation service then decides by input identity
/// whether anything has to be recomputed. All signals come from the same
/// snapshot.
pub fn use_kpi_metrics<P>(provider: P, config: KpiConfig) -> KpiHandle
where
    P: SnapshotProvider + 'static,
{
    let service = KpiDerivationService::with_config(provider, config);
    let reading: Memo<KpiReading> = create_memo(move |_| service.read());

    KpiHandle {
        kpis: Signal::derive(move || reading.with(|r| Arc::clone(&r.kpis))),
        is_loading: Signal::derive(move || reading.with(|r| r.is_loading)),
        has_error: Signal::derive(move || reading.with(|r| r.has_error)),
    }
}
