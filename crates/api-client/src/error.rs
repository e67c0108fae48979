use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The recommendation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The recommendation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to deserialize the recommendation response: {0}")]
    Deserialization(String),

    #[error("{0}")]
    InvalidRequest(String),
}
