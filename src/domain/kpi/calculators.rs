//! Pure single-source calculators. Each is total over its input collection
//! and falls back to zero when there is nothing to measure.

use super::value_objects::{ChangeThresholds, ChangeType};
use crate::domain::sources::{InvestmentRecord, RenewableRecord};

/// 1 억 = 10,000 만
pub const SMALL_UNITS_PER_LARGE_UNIT: f64 = 10_000.0;

const LARGE_UNIT: char = '억';
const SMALL_UNIT: char = '만';
const CURRENCY_SUFFIX: char = '원';

pub fn change_type_of(change: f64, thresholds: &ChangeThresholds) -> ChangeType {
    thresholds.classify(change)
}

/// Sum of committed capital
pub fn total_investment(records: &[InvestmentRecord]) -> f64 {
    records.iter().map(|r| r.amount.value()).sum()
}

/// Sum of expected jobs
pub fn total_employment(records: &[InvestmentRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.expected_jobs)).sum()
}

/// Mean progress fraction, 0 for an empty collection
pub fn average_progress(records: &[InvestmentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.progress.value().clamp(0.0, 1.0)).sum();
    sum / records.len() as f64
}

/// Records with progress above one half
pub fn advanced_project_count(records: &[InvestmentRecord]) -> usize {
    records.iter().filter(|r| r.is_substantially_advanced()).count()
}

/// Sum of capacity in MW
pub fn total_renewable_capacity(records: &[RenewableRecord]) -> f64 {
    records
        .iter()
        .map(|r| r.capacity.value())
        .filter(|mw| mw.is_finite())
        .sum()
}

/// Reads the first explicit amount from a description, in 억.
///
/// Recognised forms are `<number>억` (optionally followed by `원`),
/// `<number>만원`, and the compound `<number>억 <number>만원`, where each
/// number may carry `,` separators and a decimal point. Anything else, bare
/// percentages included, yields 0.
pub fn extract_amount_from_free_text(text: &str) -> f64 {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let (value, end) = read_number(&chars, i);
        i = end;
        let Some(value) = value else {
            continue;
        };

        let unit = skip_whitespace(&chars, end);
        match (chars.get(unit), chars.get(unit + 1)) {
            (Some(&LARGE_UNIT), _) => return value + trailing_small_amount(&chars, unit + 1),
            (Some(&SMALL_UNIT), Some(&CURRENCY_SUFFIX)) => return value / SMALL_UNITS_PER_LARGE_UNIT,
            _ => {}
        }
    }
    0.0
}

/// The `<number>만원` part right after a `억` amount, converted to 억
fn trailing_small_amount(chars: &[char], mut i: usize) -> f64 {
    if chars.get(i) == Some(&CURRENCY_SUFFIX) {
        i += 1;
    }
    let start = skip_whitespace(chars, i);
    if !chars.get(start).is_some_and(char::is_ascii_digit) {
        return 0.0;
    }
    let (value, end) = read_number(chars, start);
    let unit = skip_whitespace(chars, end);
    match (value, chars.get(unit), chars.get(unit + 1)) {
        (Some(value), Some(&SMALL_UNIT), Some(&CURRENCY_SUFFIX)) => value / SMALL_UNITS_PER_LARGE_UNIT,
        _ => 0.0,
    }
}

/// Digit run starting at `start`, with `,` separators and a decimal point
fn read_number(chars: &[char], start: usize) -> (Option<f64>, usize) {
    let mut end = start;
    while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == ',' || chars[end] == '.') {
        end += 1;
    }
    let digits: String = chars[start..end].iter().filter(|c| **c != ',').collect();
    (digits.trim_end_matches('.').parse::<f64>().ok(), end)
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Round-robin label for a record whose sector is unknown. Cosmetic only.
pub fn sector_for_index<S: AsRef<str>>(index: usize, sectors: &[S]) -> &str {
    if sectors.is_empty() {
        return "";
    }
    sectors[index % sectors.len()].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_units() {
        assert_eq!(extract_amount_from_free_text("총 1,500억원 투자"), 1500.0);
        assert_eq!(extract_amount_from_free_text("투자 2.5 억"), 2.5);
        assert_eq!(extract_amount_from_free_text("5,000만원 지원"), 0.5);
    }

    #[test]
    fn free_text_without_explicit_amount_is_zero() {
        assert_eq!(extract_amount_from_free_text("지원 30%"), 0.0);
        assert_eq!(extract_amount_from_free_text("고용 3만명 예상"), 0.0);
        assert_eq!(extract_amount_from_free_text(""), 0.0);
        assert_eq!(extract_amount_from_free_text("억원 규모"), 0.0);
    }

    #[test]
    fn compound_amount_adds_the_small_unit_part() {
        assert_eq!(extract_amount_from_free_text("1억 5,000만원"), 1.5);
        assert_eq!(extract_amount_from_free_text("2억원 5000만원 지원"), 2.5);
        assert_eq!(extract_amount_from_free_text("3억원 규모, 지원 30%"), 3.0);
        assert_eq!(extract_amount_from_free_text("1억 30%"), 1.0);
    }

    #[test]
    fn skips_percentages_before_the_amount() {
        assert_eq!(extract_amount_from_free_text("지분 30%, 300억 투자"), 300.0);
    }

    #[test]
    fn sector_round_robin() {
        let sectors = ["a", "b", "c"];
        assert_eq!(sector_for_index(0, &sectors), "a");
        assert_eq!(sector_for_index(4, &sectors), "b");
        assert_eq!(sector_for_index(3, &[] as &[&str]), "");
    }
}
