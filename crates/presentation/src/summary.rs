use crate::currency::format_inr;
use core_types::{AllocationSlice, SipInput, SipResult};

/// Display strings for the SIP calculator panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SipSummary {
    pub monthly: String,
    pub rate: String,
    pub period: String,
    pub invested: String,
    pub returns: String,
    pub total: String,
    /// Invested vs. returns shares of the total, for the donut.
    pub shares: Vec<AllocationSlice>,
}

impl SipSummary {
    pub fn new(input: &SipInput, result: &SipResult) -> Self {
        Self {
            monthly: format_inr(input.monthly_contribution),
            rate: format!("{}%", input.annual_rate_percent),
            period: period_label(input.years),
            invested: format_inr(result.invested_amount),
            returns: format_inr(result.estimated_returns),
            total: format_inr(result.future_value),
            shares: result.shares(),
        }
    }
}

pub fn period_label(years: f64) -> String {
    if years == 1.0 {
        "1 Year".to_string()
    } else {
        format!("{} Years", years)
    }
}
