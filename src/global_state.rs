use once_cell::sync::OnceCell;

use crate::domain::sources::{
    DashboardSources, DataSource, InvestmentRecord, RenewableRecord, TrafficRecord,
};
use crate::infrastructure::store::SignalSourceStore;

/// Signal-backed stores for the three dashboard feeds
pub type DashboardSignals = DashboardSources<
    SignalSourceStore<InvestmentRecord>,
    SignalSourceStore<RenewableRecord>,
    SignalSourceStore<TrafficRecord>,
>;

static SOURCES: OnceCell<DashboardSignals> = OnceCell::new();

/// Process-wide stores fed by the JS API. Only the presentation layer reads
/// these; the derivation service receives its provider explicitly.
pub fn dashboard_sources() -> &'static DashboardSignals {
    SOURCES.get_or_init(|| {
        DashboardSources::new(SignalSourceStore::new(), SignalSourceStore::new(), SignalSourceStore::new())
    })
}

crate::global_sources! {
    pub investment_store => investment: InvestmentRecord,
    pub renewable_store => renewable: RenewableRecord,
    pub traffic_store => traffic: TrafficRecord,
}

/// Flip the loading flag of one feed
pub fn set_source_loading(source: DataSource, is_loading: bool) {
    match source {
        DataSource::Investment => investment_store().set_loading(is_loading),
        DataSource::Renewable => renewable_store().set_loading(is_loading),
        DataSource::Traffic => traffic_store().set_loading(is_loading),
    }
}
