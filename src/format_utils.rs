use crate::domain::kpi::{DEFAULT_AMOUNT_UNIT, KpiMetric, round_to_cents};

/// Render a percentage with exactly two fractional digits.
///
/// - `is_decimal == true` -> `value` is a fraction, `0.1234` -> `12.34%`
/// - `is_decimal == false` -> `value` is already a percentage, `12.34` -> `12.34%`
pub fn format_percentage(value: f64, is_decimal: bool) -> String {
    let percent = if is_decimal { value * 100.0 } else { value };
    format!("{:.2}%", finite_or_zero(percent))
}

/// Thousands-grouped amount followed by the default currency label (`억원`)
pub fn format_currency(value: f64) -> String {
    format_currency_with_unit(value, DEFAULT_AMOUNT_UNIT)
}

pub fn format_currency_with_unit(value: f64, unit: &str) -> String {
    format!("{}{}", format_number(value), unit)
}

/// ko-KR style grouping: `1234567.891` -> `1,234,567.891`. At most three
/// fractional digits are kept and trailing zeros are dropped.
pub fn format_number(value: f64) -> String {
    let value = finite_or_zero(value);
    let scaled = (value * 1000.0).round() / 1000.0;
    let rounded = if scaled.is_finite() { scaled + 0.0 } else { value };
    let rendered = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Signed percentage of a fractional change: `0.05` -> `+5.00%`, `-0.05` -> `-5.00%`.
/// The sign follows the rendered digits, so `-0.00001` prints as `+0.00%`.
pub fn format_change_rate(value: f64) -> String {
    let percent = round_to_cents(finite_or_zero(value) * 100.0) + 0.0;
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_percentage(percent, false))
}

/// `current / total` as a percentage; `0.00%` when `total` is zero
pub fn format_progress(current: f64, total: f64) -> String {
    if total == 0.0 {
        return format_percentage(0.0, false);
    }
    format_percentage(current / total, true)
}

/// Display form of a KPI value with its unit label, e.g. `1,200명`
pub fn format_metric_value(metric: &KpiMetric) -> String {
    format!("{}{}", format_number(metric.value), metric.unit)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// NaN and infinities render as zero; `-0.0` becomes `0.0`
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value + 0.0 } else { 0.0 }
}
