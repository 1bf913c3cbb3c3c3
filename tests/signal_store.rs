use leptos::*;
use regional_kpi_dashboard::domain::kpi::KpiConfig;
use regional_kpi_dashboard::domain::sources::{
    DashboardSources, InvestmentRecord, RenewableRecord, SourceStore, TrafficRecord,
};
use regional_kpi_dashboard::infrastructure::store::SignalSourceStore;
use regional_kpi_dashboard::presentation::kpi_hook::use_kpi_metrics;

type Signals = DashboardSources<
    SignalSourceStore<InvestmentRecord>,
    SignalSourceStore<RenewableRecord>,
    SignalSourceStore<TrafficRecord>,
>;

fn signals() -> Signals {
    DashboardSources::new(SignalSourceStore::new(), SignalSourceStore::new(), SignalSourceStore::new())
}

#[test]
fn replacing_records_changes_identity() {
    let store = SignalSourceStore::<InvestmentRecord>::new();
    let before = store.records();
    store.set_records(vec![InvestmentRecord::new("inv-1", 10.0, 1, 0.1)]);
    let after = store.records();

    assert!(!std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 1);
    assert!(store.snapshot().same_as(&store.snapshot()));
}

#[test]
fn failed_refresh_keeps_records_but_flags_the_source() {
    let store = SignalSourceStore::<RenewableRecord>::new();
    store.set_records(vec![RenewableRecord::new("re-1", 42.0)]);
    store.begin_loading();
    assert!(store.is_loading());

    store.fail("upstream timeout");
    assert!(!store.is_loading());
    assert!(store.has_error());
    assert!(store.snapshot().has_error);
    assert_eq!(store.error().as_deref(), Some("upstream timeout"));
    assert_eq!(store.records().len(), 1);

    store.set_records(Vec::new());
    assert_eq!(store.error(), None);
    assert!(!store.has_error());
}

#[test]
fn failed_cycle_emits_the_zero_set() {
    let sources = signals();
    sources.investment.set_records(vec![InvestmentRecord::new("inv-1", 300.0, 20, 0.5)]);
    let handle = use_kpi_metrics(sources.clone(), KpiConfig::default());
    assert_eq!(handle.kpis.get().total_investment.value, 300.0);

    sources.investment.begin_loading();
    sources.investment.fail("timeout");
    assert!(!handle.is_loading.get());
    assert!(handle.has_error.get());
    assert!(handle.kpis.get().metrics().iter().all(|(_, m)| m.value == 0.0));

    sources.investment.set_records(vec![InvestmentRecord::new("inv-1", 300.0, 20, 0.5)]);
    assert!(!handle.has_error.get());
    assert_eq!(handle.kpis.get().total_investment.value, 300.0);
}

#[test]
fn hook_follows_store_updates() {
    let sources = signals();
    let handle = use_kpi_metrics(sources.clone(), KpiConfig::default());

    assert_eq!(handle.kpis.get().total_investment.value, 0.0);
    assert!(!handle.is_loading.get());

    sources.investment.set_records(vec![
        InvestmentRecord::new("inv-1", 100.0, 50, 0.5),
        InvestmentRecord::new("inv-2", 200.0, 150, 1.0),
    ]);
    assert_eq!(handle.kpis.get().total_investment.value, 300.0);
    assert_eq!(handle.kpis.get().employment.value, 200.0);

    sources.renewable.set_loading(true);
    assert!(handle.is_loading.get());
    assert_eq!(handle.kpis.get().total_investment.value, 0.0);

    sources.renewable.set_records(vec![RenewableRecord::new("re-1", 600.0)]);
    assert!(!handle.is_loading.get());
    assert_eq!(handle.kpis.get().renewable_energy.value, 600.0);
    assert_eq!(handle.kpis.get().renewable_energy.change, 15.0);
}

#[test]
fn traffic_loading_blocks_the_whole_set() {
    let sources = signals();
    sources.investment.set_records(vec![InvestmentRecord::new("inv-1", 100.0, 10, 0.2)]);
    let handle = use_kpi_metrics(sources.clone(), KpiConfig::default());
    assert_eq!(handle.kpis.get().new_companies.value, 1.0);

    sources.traffic.begin_loading();
    assert!(handle.is_loading.get());
    assert_eq!(handle.kpis.get().new_companies.value, 0.0);
}
