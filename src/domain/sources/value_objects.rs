use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - committed capital in the large currency unit (억원).
/// Never negative; non-finite input collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(non_negative(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Value Object - generation capacity in megawatts. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{}MW", _0)]
pub struct Megawatts(f64);

impl Megawatts {
    pub fn new(value: f64) -> Self {
        Self(non_negative(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Megawatts {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Value Object - completion progress as a fraction in `[0, 1]`.
///
/// This is the only place where the scale of upstream progress values is
/// decided: anything in `(1, 100]` is read as a percentage and divided by 100,
/// then the result is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{:.2}", _0)]
pub struct Progress(f64);

impl Progress {
    pub const NONE: Progress = Progress(0.0);

    /// Fraction input, clamped.
    pub fn from_fraction(value: f64) -> Self {
        if !value.is_finite() {
            return Self::NONE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Upstream input on an unknown scale.
    pub fn normalize(raw: f64) -> Self {
        if raw.is_finite() && raw > 1.0 && raw <= 100.0 {
            Self::from_fraction(raw / 100.0)
        } else {
            Self::from_fraction(raw)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::from_fraction(value)
    }
}

/// Value Object - lifecycle status of an investment project
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    Delayed,
}

/// Upstream feed identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    Investment,
    Renewable,
    Traffic,
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn progress_percent_scale_is_normalized_once() {
        assert_eq!(Progress::normalize(75.0).value(), 0.75);
        assert_eq!(Progress::normalize(0.4).value(), 0.4);
        assert_eq!(Progress::normalize(1.0).value(), 1.0);
        assert_eq!(Progress::normalize(250.0).value(), 1.0);
        assert_eq!(Progress::normalize(-3.0).value(), 0.0);
        assert_eq!(Progress::normalize(f64::NAN).value(), 0.0);
    }

    #[test]
    fn amounts_are_never_negative() {
        assert_eq!(Amount::new(-10.0).value(), 0.0);
        assert_eq!(Amount::new(f64::INFINITY).value(), 0.0);
        assert_eq!(Megawatts::from(-1.0).value(), 0.0);
    }

    #[test]
    fn status_uses_kebab_case_strings() {
        assert_eq!(ProjectStatus::InProgress.to_string(), "in-progress");
        assert_eq!(ProjectStatus::from_str("delayed").unwrap(), ProjectStatus::Delayed);
        assert!(ProjectStatus::from_str("cancelled").is_err());
        assert_eq!(DataSource::from_str("renewable").unwrap(), DataSource::Renewable);
    }
}
