use regional_kpi_dashboard::format_utils::{
    format_change_rate, format_currency, format_currency_with_unit, format_number,
    format_percentage, format_progress,
};

#[test]
fn percentage_has_two_fraction_digits() {
    assert_eq!(format_percentage(0.1234, true), "12.34%");
    assert_eq!(format_percentage(12.34, false), "12.34%");
    assert_eq!(format_percentage(1.0, true), "100.00%");
    assert_eq!(format_percentage(0.0, false), "0.00%");
    assert_eq!(format_percentage(-0.05, true), "-5.00%");
}

#[test]
fn currency_groups_and_appends_unit() {
    assert_eq!(format_currency(1_234_567.0), "1,234,567억원");
    assert_eq!(format_currency(0.5), "0.5억원");
    assert_eq!(format_currency_with_unit(2500.0, "만원"), "2,500만원");
}

#[test]
fn number_is_grouped_without_suffix() {
    assert_eq!(format_number(1_000_000.0), "1,000,000");
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(-1000.25), "-1,000.25");
}

#[test]
fn change_rate_is_sign_prefixed() {
    assert_eq!(format_change_rate(0.05), "+5.00%");
    assert_eq!(format_change_rate(0.0), "+0.00%");
    assert_eq!(format_change_rate(-0.125), "-12.50%");
}

#[test]
fn change_rate_sign_follows_rendered_digits() {
    assert_eq!(format_change_rate(-0.00001), "+0.00%");
    assert_eq!(format_change_rate(0.00001), "+0.00%");
    assert_eq!(format_change_rate(-0.00006), "-0.01%");
}

#[test]
fn progress_guards_zero_total() {
    assert_eq!(format_progress(5.0, 0.0), "0.00%");
    assert_eq!(format_progress(0.0, 0.0), "0.00%");
    assert_eq!(format_progress(1.0, 4.0), "25.00%");
    assert_eq!(format_progress(300.0, 200.0), "150.00%");
}
