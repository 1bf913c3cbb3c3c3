use std::sync::Arc;

use regional_kpi_dashboard::domain::kpi::KpiConfig;
use regional_kpi_dashboard::domain::logging::{
    LogComponent, LogEntry, LogLevel, Logger, init_logger,
};
use regional_kpi_dashboard::infrastructure::dto::parse_investment_payload;
use regional_kpi_dashboard::infrastructure::services::MemoryLogger;

#[test]
fn memory_logger_keeps_rendered_lines() {
    let logger = MemoryLogger::new();
    logger.info(LogComponent::Domain("KpiAggregator"), "derived");
    logger.log_with_metadata(
        LogLevel::Warn,
        LogComponent::Infrastructure("Ingestion"),
        "clamped",
        "id=inv-9",
    );

    let entries = logger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, LogLevel::Info);
    assert_eq!(entries[1].metadata.as_deref(), Some("id=inv-9"));

    let lines = logger.lines();
    assert!(lines[0].ends_with(" INFO DOM:KpiAggregator: derived"), "{}", lines[0]);
    assert!(lines[1].ends_with(" WARN INF:Ingestion: clamped | id=inv-9"), "{}", lines[1]);

    logger.clear();
    assert!(logger.entries().is_empty());
}

#[test]
fn levels_are_ordered_by_severity() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert_eq!(LogComponent::Application("KpiDerivation").to_string(), "APP:KpiDerivation");

    let entry = LogEntry::new(LogLevel::Error, LogComponent::Presentation("Api"), "boom");
    assert!(entry.render().contains("ERROR PRE:Api: boom"));
}

#[test]
fn ingestion_clamps_are_reported_through_the_global_logger() {
    let logger = Arc::new(MemoryLogger::new());
    init_logger(Box::new(Arc::clone(&logger)));

    let payload = r#"[{"id": "neg-1", "amount": -5, "expectedJobs": -2, "progress": 140}]"#;
    let records = parse_investment_payload(payload, &KpiConfig::default()).unwrap();
    assert_eq!(records[0].amount.value(), 0.0);

    let warnings: Vec<String> = logger
        .entries()
        .into_iter()
        .filter(|e| e.level == LogLevel::Warn && e.message.starts_with("investment neg-1"))
        .map(|e| e.message)
        .collect();
    assert_eq!(warnings.len(), 3, "{:?}", warnings);
    assert!(warnings.iter().any(|m| m.contains("negative amount -5")));
}
