//! # 품질 지표 핸들러
//!
//! - `GET /quality` → 고정된 커버리지와 테스트 결과

use axum::Json;

use crate::models::QualityMetrics;

pub async fn get_quality() -> Json<QualityMetrics> {
    Json(QualityMetrics::fixed())
}

#[cfg(test)]
mod tests {
    use crate::routes::{router, test_support::*};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn quality_reports_fixed_metrics() {
        let response = send(router(state_with(&[])), "GET", "/quality").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["code_coverage"], 85.0);

        let results = body["test_results"].as_array().unwrap();
        let names: Vec<&str> = results.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            ["unit_tests", "integration_tests", "security_tests", "performance_tests"]
        );
        assert!(results.iter().all(|r| r["status"] == "passed"));
    }
}
