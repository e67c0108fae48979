use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Donut radius must be a positive, finite number, got {0}")]
    InvalidRadius(f64),

    #[error("Slice '{label}' has a percent outside 0..=100: {percent}")]
    InvalidPercent { label: String, percent: f64 },
}
