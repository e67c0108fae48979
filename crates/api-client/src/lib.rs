use crate::error::ApiError;
use async_trait::async_trait;
use configuration::RecommendationConfig;
use std::time::Duration;

pub mod error;
pub mod responses;
// --- Public API ---
pub use responses::{
    Allocation, FundEntry, OrderedMap, RecommendationRequest, RecommendationResponse,
};

/// Message shown when the form is submitted without a goal.
pub const MISSING_GOAL_MESSAGE: &str = "Please select an investment goal.";

/// The interface to the fund recommendation service.
/// The CLI depends on this trait, so a stub can stand in for the live service.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Asks the service for an allocation and fund shortlist for a SIP goal.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ApiError>;
}

impl RecommendationRequest {
    /// Builds a request, refusing an empty goal before anything is sent.
    pub fn new(sip: f64, years: u32, goal: &str) -> Result<Self, ApiError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(ApiError::InvalidRequest(MISSING_GOAL_MESSAGE.to_string()));
        }
        Ok(Self {
            sip,
            years,
            goal: goal.to_string(),
        })
    }
}

/// Calls the recommendation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationClient {
    pub fn new(config: &RecommendationConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/recommend-funds", self.base_url)
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ApiError> {
        let url = self.endpoint();
        tracing::info!(%url, goal = %request.goal, "Requesting fund recommendations.");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Recommendation service returned an error.");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str::<RecommendationResponse>(&text)
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
