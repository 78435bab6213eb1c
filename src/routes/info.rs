//! # 서비스 소개 핸들러
//!
//! - `GET /info` → 서비스 설명과 엔드포인트 목록 (정적 내용)

use axum::Json;
use serde_json::{json, Value};

use crate::models::SERVICE_VERSION;

const ENDPOINTS: [&str; 8] = [
    "/health - Health check endpoint",
    "/ready - Readiness check endpoint",
    "/status - Detailed status information",
    "/config - Configuration information",
    "/info - Service information",
    "/security - Security scan information",
    "/quality - Quality metrics information",
    "/scan - Trigger security vulnerability scan (POST only)",
];

const SECURITY_FEATURES: [&str; 6] = [
    "Vulnerability scanning",
    "Security headers",
    "Environment variable masking",
    "Quality gates enforcement",
    "Threshold violation detection",
    "Runtime security monitoring",
];

/// `GET /info` — 상태에 의존하지 않으므로 State를 받지 않습니다.
pub async fn get_info() -> Json<Value> {
    Json(json!({
        "service": "Cloud-Native Network Function Simulator",
        "description": "A secure Rust application simulating a CNF for O-Cloud environment with security scanning and quality gates",
        "endpoints": ENDPOINTS,
        "version": SERVICE_VERSION,
        "author": "O-Cloud CNF Simulator",
        "security_features": SECURITY_FEATURES,
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::{router, test_support::*};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn info_is_byte_identical_across_calls() {
        let state = state_with(&[]);
        let first = send(router(state.clone()), "GET", "/info").await;
        assert_eq!(first.status(), StatusCode::OK);
        let first = body_bytes(first).await;

        // 상태를 바꾸는 요청이 끼어도 결과는 같아야 합니다.
        send(router(state.clone()), "POST", "/scan").await;
        let second = body_bytes(send(router(state), "GET", "/info").await).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn info_lists_every_endpoint() {
        let body = body_json(send(router(state_with(&[])), "GET", "/info").await).await;
        let endpoints = body["endpoints"].as_array().unwrap();

        assert_eq!(endpoints.len(), 8);
        assert!(endpoints
            .iter()
            .any(|e| e.as_str().unwrap().starts_with("/scan")));
        assert_eq!(body["security_features"].as_array().unwrap().len(), 6);
        assert_eq!(body["version"], "1.0.0");
    }
}
