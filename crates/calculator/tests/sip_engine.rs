//! Integration tests for the SIP calculator

use approx::assert_relative_eq;
use calculator::{compute_sip, SipEngine};
use core_types::SipInput;

#[test]
fn test_reference_projection() {
    let result = compute_sip(&SipInput::new(5000.0, 12.0, 10)).unwrap();

    assert_eq!(result.invested_amount, 600_000.0);
    assert_eq!(result.future_value.round(), 1_161_695.0);
    assert_eq!(result.estimated_returns.round(), 561_695.0);
}

#[test]
fn test_zero_rate_returns_nothing() {
    for (monthly, years) in [(1.0, 1), (500.0, 3), (5000.0, 10), (123_456.78, 40)] {
        let result = compute_sip(&SipInput::new(monthly, 0.0, years)).unwrap();
        assert_eq!(result.future_value, result.invested_amount);
        assert_eq!(result.estimated_returns, 0.0);
    }
}

#[test]
fn test_total_is_invested_plus_returns() {
    for rate in [0.0, 0.5, 6.5, 12.0, 18.0, 30.0] {
        for years in [1, 5, 15, 30] {
            let result = compute_sip(&SipInput::new(2500.0, rate, years)).unwrap();
            assert_eq!(
                result.future_value,
                result.invested_amount + result.estimated_returns
            );
            assert_eq!(result.invested_amount, 2500.0 * f64::from(years) * 12.0);
        }
    }
}

#[test]
fn test_higher_rate_grows_more() {
    let mut previous = compute_sip(&SipInput::new(1000.0, 0.0, 20)).unwrap().future_value;
    for step in 1..=40 {
        let rate = f64::from(step) * 0.5;
        let current = compute_sip(&SipInput::new(1000.0, rate, 20)).unwrap().future_value;
        assert!(current > previous, "rate {rate} did not increase the total");
        previous = current;
    }
}

#[test]
fn test_contributions_are_made_at_period_start() {
    // One month at 12% a year: the single payment earns one month of interest.
    let result = SipEngine::new().calculate(&SipInput {
        monthly_contribution: 100.0,
        annual_rate_percent: 12.0,
        years: 1.0 / 12.0,
    });
    let result = result.unwrap();
    assert_relative_eq!(result.future_value, 101.0, max_relative = 1e-12);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let input = SipInput::new(7350.25, 11.75, 17);
    let first = compute_sip(&input).unwrap();
    let second = compute_sip(&input).unwrap();

    assert_eq!(first.future_value.to_bits(), second.future_value.to_bits());
    assert_eq!(first.estimated_returns.to_bits(), second.estimated_returns.to_bits());
    assert_eq!(first.invested_amount.to_bits(), second.invested_amount.to_bits());
}

#[test]
fn test_long_horizons_stay_finite() {
    let result = compute_sip(&SipInput::new(1.0e9, 15.0, 150)).unwrap();
    assert!(result.future_value.is_finite());
    assert!(result.future_value > result.invested_amount);
}
