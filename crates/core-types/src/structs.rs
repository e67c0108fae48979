use serde::{Deserialize, Serialize};

use crate::enums::ColorKey;
use crate::error::CoreError;

/// The three inputs of a SIP projection.
///
/// Values are kept as raw `f64` so that an unparsable form field can travel to
/// the engine as `NaN` and be reported there, instead of being silently
/// replaced by a default. `years` is a whole number of years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

impl SipInput {
    pub fn new(monthly_contribution: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            monthly_contribution,
            annual_rate_percent,
            years: f64::from(years),
        }
    }

    /// Builds an input from the raw text of the three calculator fields.
    ///
    /// Nothing is rejected here: fields that do not parse become `NaN`.
    pub fn from_fields(monthly: &str, rate: &str, years: &str) -> Self {
        Self {
            monthly_contribution: parse_amount(monthly),
            annual_rate_percent: parse_amount(rate),
            years: parse_years(years),
        }
    }

    /// Rejects inputs outside the engine's preconditions.
    ///
    /// The engine itself only refuses non-finite values; callers that want to
    /// turn away a negative contribution or a zero duration do it here first.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.monthly_contribution.is_finite() || self.monthly_contribution <= 0.0 {
            return Err(CoreError::InvalidInput(
                "monthly_contribution".to_string(),
                format!("must be a positive amount, got {}", self.monthly_contribution),
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(CoreError::InvalidInput(
                "annual_rate_percent".to_string(),
                format!("must be zero or more, got {}", self.annual_rate_percent),
            ));
        }
        if !self.years.is_finite() || self.years < 1.0 || self.years.fract() != 0.0 {
            return Err(CoreError::InvalidInput(
                "years".to_string(),
                format!("must be a whole number of years, got {}", self.years),
            ));
        }
        Ok(())
    }
}

/// Parses a decimal form value, yielding `NaN` for empty or non-numeric text.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses a whole-year form value. Fractional input is truncated; anything
/// unparsable yields `NaN`.
pub fn parse_years(raw: &str) -> f64 {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(years) => years as f64,
        Err(_) => match raw.parse::<f64>() {
            Ok(years) if years.is_finite() => years.trunc(),
            _ => f64::NAN,
        },
    }
}

/// The outcome of a SIP projection, in full precision.
///
/// `future_value` is always exactly `invested_amount + estimated_returns`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested_amount: f64,
    pub estimated_returns: f64,
    pub future_value: f64,
}

impl SipResult {
    pub fn from_parts(invested_amount: f64, estimated_returns: f64) -> Self {
        Self {
            invested_amount,
            estimated_returns,
            future_value: invested_amount + estimated_returns,
        }
    }

    /// Splits the projected total into invested/returns shares, in percent.
    ///
    /// A zero total yields two zero shares rather than `NaN`.
    pub fn shares(&self) -> Vec<AllocationSlice> {
        let (invested, returns) = if self.future_value > 0.0 {
            (
                self.invested_amount / self.future_value * 100.0,
                self.estimated_returns / self.future_value * 100.0,
            )
        } else {
            (0.0, 0.0)
        };
        vec![
            AllocationSlice::new("Invested", invested),
            AllocationSlice::new("Returns", returns),
        ]
    }
}

/// One named share of a portfolio or projection, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub percent: f64,
}

impl AllocationSlice {
    pub fn new(label: impl Into<String>, percent: f64) -> Self {
        Self {
            label: label.into(),
            percent,
        }
    }
}

/// A single laid-out donut segment, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub label: String,
    /// The share this arc was laid out from, kept for legends and tooltips.
    pub percent: f64,
    pub arc_length: f64,
    pub rotation_offset: f64,
    pub color: ColorKey,
}
