//! HTTP surface for on-demand company analysis.
//!
//! - `POST /analyze` with `{"company_name": "..."}` returns the [`CompanyReport`]
//! - `GET /health` returns `ok`

use crate::models::CompanyReport;
use crate::pipeline::NewsPipeline;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub company_name: String,
}

#[instrument(level = "info", skip_all)]
async fn analyze(
    State(pipeline): State<Arc<NewsPipeline>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<CompanyReport>, (StatusCode, String)> {
    let company = req.company_name.trim();
    if company.is_empty() {
        warn!("Rejected request with blank company name");
        return Err((
            StatusCode::BAD_REQUEST,
            "company_name must not be empty".to_string(),
        ));
    }
    info!(company, "Received analysis request");
    let report = pipeline.analyze(company).await;
    Ok(Json(report))
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(pipeline: Arc<NewsPipeline>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(pipeline)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run_server(pipeline: NewsPipeline, addr: &str) -> Result<(), Box<dyn Error>> {
    let app = router(Arc::new(pipeline));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening for analysis requests");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::{FakeNarrator, fixture_pipeline};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(fixture_pipeline(Arc::new(FakeNarrator::default()))))
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let response = app()
            .oneshot(analyze_request(r#"{"company_name": "Tesla"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let report: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(report["company"], "Tesla");
        assert_eq!(report["articles"].as_array().unwrap().len(), 2);
        assert_eq!(report["outcomes"][1]["status"], "skipped");
        assert_eq!(report["outcomes"][1]["reason"]["kind"], "http_status");
        assert_eq!(
            report["final_summary"],
            "Media coverage for Tesla is mostly Happy."
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_company() {
        let response = app()
            .oneshot(analyze_request(r#"{"company_name": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_field() {
        let response = app().oneshot(analyze_request("{}")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
