//! Tests the HTTP client against a stub recommendation service.

use api_client::error::ApiError;
use api_client::{HttpRecommendationClient, RecommendationClient, RecommendationRequest};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use configuration::RecommendationConfig;
use serde_json::{json, Value};
use std::net::SocketAddr;

async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> HttpRecommendationClient {
    HttpRecommendationClient::new(&RecommendationConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
    })
    .unwrap()
}

async fn recommend_handler(Json(body): Json<Value>) -> impl IntoResponse {
    // A literal body, so the keys go out in exactly this non-alphabetical order.
    // The goal and years are echoed back to show the request arrived intact.
    let text = format!(
        r#"{{
            "investment_horizon": "{} years",
            "risk_profile": {},
            "allocation": {{"Hybrid": 10, "Equity": 65, "Debt": 25}},
            "recommended_funds": {{
                "Hybrid": [],
                "Equity": [{{"scheme_name": "Alpha Bluechip", "sub_category": "Large Cap", "sharpe_ratio": 1.3}}],
                "Debt": []
            }},
            "metric_used": "sharpe_ratio"
        }}"#,
        body["years"], body["goal"]
    );
    ([(CONTENT_TYPE, "application/json")], text)
}

#[tokio::test]
async fn test_successful_recommendation() {
    let addr = spawn_stub(Router::new().route("/recommend-funds", post(recommend_handler))).await;
    let client = client_for(addr);

    let request = RecommendationRequest::new(5000.0, 10, "wealth").unwrap();
    let response = client.recommend(&request).await.unwrap();

    assert_eq!(response.investment_horizon, "10 years");
    assert_eq!(response.risk_profile, "wealth");
    let labels: Vec<&str> = response.allocation.iter().map(|(k, _)| k).collect();
    assert_eq!(labels, ["Hybrid", "Equity", "Debt"]);
    let categories: Vec<&str> = response.recommended_funds.iter().map(|(k, _)| k).collect();
    assert_eq!(categories, ["Hybrid", "Equity", "Debt"]);
    let equity = response.recommended_funds.get("Equity").unwrap();
    assert_eq!(equity[0].metric(&response.metric_used), Some(1.3));
}

#[tokio::test]
async fn test_server_error_is_surfaced() {
    let app = Router::new().route(
        "/recommend-funds",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "scoring failed") }),
    );
    let client = client_for(spawn_stub(app).await);

    let request = RecommendationRequest::new(1000.0, 3, "travel").unwrap();
    match client.recommend(&request).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "scoring failed");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let app = Router::new().route("/recommend-funds", post(|| async { Json(json!({"allocation": []})) }));
    let client = client_for(spawn_stub(app).await);

    let request = RecommendationRequest::new(1000.0, 3, "travel").unwrap();
    let err = client.recommend(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_a_request_error() {
    // Bind and drop a listener to get a port nobody is serving.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let request = RecommendationRequest::new(1000.0, 3, "travel").unwrap();
    let err = client_for(addr).recommend(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
