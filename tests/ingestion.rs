use regional_kpi_dashboard::domain::errors::AppError;
use regional_kpi_dashboard::domain::kpi::KpiConfig;
use regional_kpi_dashboard::domain::sources::ProjectStatus;
use regional_kpi_dashboard::infrastructure::dto::{
    parse_investment_payload, parse_renewable_payload, parse_status, parse_traffic_payload,
};

#[test]
fn investment_fields_are_normalized() {
    let json = r#"[
        {"id": 7, "companyName": "한빛소재", "sector": "소재", "investmentAmount": "1,200",
         "jobs": 85, "progress": 0.4, "status": "in-progress", "location": "군산", "startDate": "2024-03-01"},
        {"id": "inv-2", "amount": -50, "expectedJobs": -3, "progress": 250, "status": "완료"},
        {"id": "inv-3", "progress": "60%", "description": "총 500억원 투자 예정"}
    ]"#;
    let records = parse_investment_payload(json, &KpiConfig::default()).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.id, "7");
    assert_eq!(first.company, "한빛소재");
    assert_eq!(first.sector, "소재");
    assert_eq!(first.amount.value(), 1200.0);
    assert_eq!(first.expected_jobs, 85);
    assert_eq!(first.progress.value(), 0.4);
    assert_eq!(first.status, ProjectStatus::InProgress);
    assert_eq!(first.location, "군산");
    assert_eq!(first.start_date, "2024-03-01");

    let second = &records[1];
    assert_eq!(second.amount.value(), 0.0);
    assert_eq!(second.expected_jobs, 0);
    assert_eq!(second.progress.value(), 1.0);
    assert_eq!(second.status, ProjectStatus::Completed);

    let third = &records[2];
    assert_eq!(third.amount.value(), 500.0);
    assert_eq!(third.progress.value(), 0.6);
    assert_eq!(third.status, ProjectStatus::Planning);
}

#[test]
fn description_without_explicit_amount_gives_zero() {
    let json = r#"[{"id": "inv-1", "description": "지원 30%"}]"#;
    let records = parse_investment_payload(json, &KpiConfig::default()).unwrap();
    assert_eq!(records[0].amount.value(), 0.0);
}

#[test]
fn missing_sector_gets_round_robin_label() {
    let json = r#"{"items": [{"id": "a"}, {"id": "b", "sector": "  "}, {"id": "c", "sector": "물류"}]}"#;
    let config = KpiConfig {
        fallback_sectors: vec!["제조업".to_string(), "에너지".to_string()],
        ..KpiConfig::default()
    };
    let records = parse_investment_payload(json, &config).unwrap();
    let sectors: Vec<&str> = records.iter().map(|r| r.sector.as_str()).collect();
    assert_eq!(sectors, ["제조업", "에너지", "물류"]);
}

#[test]
fn renewable_capacity_is_never_inferred() {
    let json = r#"{"data": [
        {"id": "s-1", "capacityMw": 120.5, "type": "태양광"},
        {"id": "w-1", "generationCapacity": "1,000"},
        {"id": "x-1", "capacity": "unknown"},
        {"id": "x-2"}
    ]}"#;
    let records = parse_renewable_payload(json).unwrap();
    let capacities: Vec<f64> = records.iter().map(|r| r.capacity.value()).collect();
    assert_eq!(capacities, [120.5, 1000.0, 0.0, 0.0]);
    assert_eq!(records[0].generation_type.as_deref(), Some("태양광"));
    assert_eq!(records[1].generation_type, None);
}

#[test]
fn non_object_items_are_skipped() {
    let json = r#"[{"id": "t-1", "volume": 1200}, 42, null, {"id": "t-2", "vehicleCount": "3,400"}]"#;
    let records = parse_traffic_payload(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].vehicle_count, 1200);
    assert_eq!(records[1].vehicle_count, 3400);
}

#[test]
fn malformed_payloads_are_ingestion_errors() {
    assert!(matches!(parse_renewable_payload("{oops"), Err(AppError::IngestionError(_))));
    assert!(matches!(parse_renewable_payload("\"text\""), Err(AppError::IngestionError(_))));
    assert!(matches!(parse_traffic_payload(r#"{"rows": []}"#), Err(AppError::IngestionError(_))));
}

#[test]
fn status_strings_in_both_languages() {
    assert_eq!(parse_status("IN_PROGRESS"), ProjectStatus::InProgress);
    assert_eq!(parse_status("in progress"), ProjectStatus::InProgress);
    assert_eq!(parse_status("진행중"), ProjectStatus::InProgress);
    assert_eq!(parse_status("지연"), ProjectStatus::Delayed);
    assert_eq!(parse_status("planning"), ProjectStatus::Planning);
    assert_eq!(parse_status(""), ProjectStatus::Planning);
    assert_eq!(parse_status("on hold"), ProjectStatus::Planning);
}
