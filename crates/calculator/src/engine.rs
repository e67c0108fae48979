use crate::error::SipError;
use core_types::{SipInput, SipResult};

/// Number of contribution periods per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// A stateless calculator for SIP projections.
#[derive(Debug, Default, Clone, Copy)]
pub struct SipEngine {}

impl SipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects a monthly SIP with contributions made at the start of each month.
    ///
    /// # Arguments
    ///
    /// * `input` - Monthly contribution, nominal annual rate in percent and duration in years.
    ///
    /// # Returns
    ///
    /// The full-precision `SipResult`, or `SipError::InvalidInput` when a field is
    /// `NaN` or infinite. Finite values outside the usual ranges (a negative
    /// contribution, say) are computed as given; validating them is up to the caller.
    ///
    /// `f64` keeps unit-level precision up to roughly 1e15, which is far beyond
    /// any realistic contribution. A projection that leaves the `f64` range
    /// altogether is reported as `SipError::Overflow`.
    pub fn calculate(&self, input: &SipInput) -> Result<SipResult, SipError> {
        Self::ensure_finite("monthly_contribution", input.monthly_contribution)?;
        Self::ensure_finite("annual_rate_percent", input.annual_rate_percent)?;
        Self::ensure_finite("years", input.years)?;

        let monthly_rate = input.annual_rate_percent / MONTHS_PER_YEAR / 100.0;
        let total_months = input.years * MONTHS_PER_YEAR;

        let future_value = if monthly_rate == 0.0 {
            input.monthly_contribution * total_months
        } else {
            // FV = P * [((1 + r)^n - 1) / r] * (1 + r)
            let growth = (1.0 + monthly_rate).powf(total_months);
            input.monthly_contribution * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
        };

        if !future_value.is_finite() {
            tracing::warn!(?input, "SIP projection left the f64 range.");
            return Err(SipError::Overflow);
        }

        let invested_amount = input.monthly_contribution * total_months;
        let estimated_returns = future_value - invested_amount;

        tracing::debug!(
            monthly_rate,
            total_months,
            invested_amount,
            estimated_returns,
            "SIP projection calculated."
        );

        Ok(SipResult::from_parts(invested_amount, estimated_returns))
    }

    fn ensure_finite(field: &'static str, value: f64) -> Result<(), SipError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(SipError::InvalidInput { field })
        }
    }
}

/// Convenience wrapper around `SipEngine::calculate`.
pub fn compute_sip(input: &SipInput) -> Result<SipResult, SipError> {
    SipEngine::new().calculate(input)
}
