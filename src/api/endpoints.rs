//! API endpoint handlers
//!
//! This module implements the HTTP endpoints of the tone analysis proxy:
//! the analysis pass-through itself plus health and connectivity checks.

use crate::core::config::Config;
use crate::core::service::ToneAnalyzer;
use crate::models::tone::{AnalyzeParams, AnalyzeRequest, ToneAnalysis, ToneCategory};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<dyn ToneAnalyzer>,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/tone", get(analyze_tone_query).post(analyze_tone_body))
        .route("/health", get(health_check))
        .route("/test-connection", get(test_connection))
        .with_state(state)
}

/// GET /tone - Analyze text passed as query parameters
async fn analyze_tone_query(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    analyze_tone(state, params).await
}

/// POST /tone - Analyze text passed as a JSON body
async fn analyze_tone_body(
    State(state): State<AppState>,
    Json(params): Json<AnalyzeParams>,
) -> Response {
    analyze_tone(state, params).await
}

/// Shared handler body for both /tone variants
///
/// Validates the text parameter, forwards one call to the analyzer, and
/// mirrors the upstream status code and body back to the caller.
async fn analyze_tone(state: AppState, params: AnalyzeParams) -> Response {
    let request_id = uuid::Uuid::new_v4();

    let text = params
        .text
        .as_deref()
        .map(sanitize_text)
        .unwrap_or_default();

    if text.is_empty() {
        warn!(%request_id, "rejected request with missing or empty text");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "text is not defined"})),
        )
            .into_response();
    }

    // "false" disables sentence-level analysis; anything else enables it
    let sentences = params.sentences.as_deref() != Some("false");
    let tones = params.tones.as_deref().and_then(ToneCategory::parse);

    let request = AnalyzeRequest {
        text,
        sentences,
        tones,
    };

    info!(
        %request_id,
        bytes = request.text.len(),
        sentences = request.sentences,
        "forwarding text to {}",
        state.analyzer.service_name()
    );

    match state.analyzer.analyze(&request).await {
        Ok(upstream) => {
            debug!(%request_id, status = upstream.status_code, "upstream response received");
            let status =
                StatusCode::from_u16(upstream.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                upstream.body,
            )
                .into_response()
        }
        Err(e) => {
            error!(%request_id, "tone analysis call failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

/// Trim surrounding whitespace and strip non-whitespace control characters
///
/// URL escaping is left to the outbound query serializer.
fn sanitize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect()
}

/// GET / - Root endpoint
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Tone Analyzer Proxy v0.1.0",
        "status": "running",
        "config": {
            "endpoint": state.config.watson_base_url,
            "api_version": state.config.watson_version,
            "credentials_configured": state.config.validate_credentials(),
        },
        "endpoints": {
            "tone": "/tone",
            "health": "/health",
            "test_connection": "/test-connection",
        },
    }))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "upstream": state.analyzer.service_name(),
        "credentials_configured": state.config.validate_credentials(),
    }))
}

/// GET /test-connection - Probe upstream connectivity with a tiny request
async fn test_connection(State(state): State<AppState>) -> impl IntoResponse {
    let probe = AnalyzeRequest {
        text: "Hello".to_string(),
        sentences: false,
        tones: None,
    };

    match state.analyzer.analyze(&probe).await {
        Ok(response) => {
            let reachable = (200..300).contains(&response.status_code);
            let analysis = serde_json::from_str::<ToneAnalysis>(&response.body).ok();
            let tone_categories = analysis
                .as_ref()
                .map(|analysis| analysis.document_tone.tone_categories.len());
            let strongest_tone = analysis.as_ref().and_then(|analysis| {
                analysis
                    .document_tone
                    .tone_categories
                    .iter()
                    .flat_map(|category| category.tones.iter())
                    .max_by(|left, right| left.score.total_cmp(&right.score))
                    .map(|tone| tone.tone_name.clone())
            });
            let content_type = response
                .headers
                .get("content-type")
                .and_then(|values| values.first());
            Json(json!({
                "status": if reachable { "success" } else { "failed" },
                "upstream": state.analyzer.service_name(),
                "upstream_status": response.status_code,
                "content_type": content_type,
                "tone_categories": tone_categories,
                "strongest_tone": strongest_tone,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }
        Err(e) => {
            error!("connectivity test failed: {}", e);
            Json(json!({
                "status": "failed",
                "upstream": state.analyzer.service_name(),
                "message": e.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "suggestions": [
                    "Check your service credentials",
                    "Verify the endpoint URL is reachable from this host",
                ],
            }))
        }
    }
}
