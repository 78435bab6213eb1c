//! # 헬스체크(Health Check) 핸들러
//!
//! 쿠버네티스 프로브가 호출하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → 라이브니스. 프로세스가 살아 있으면 항상 200
//! - `GET /ready`  → 레디니스. 별도 의존성 검사 없이 항상 준비 완료
//!
//! 두 응답 모두 브라우저 보안 헤더 세 개를 붙입니다.

use super::AppState; // 공유 상태 (설정 + 레코드)
use crate::{error::AppError, models::rfc3339};
use axum::{
    extract::State, // State Extractor: 라우터에 등록된 AppState를 주입받음
    http::header::{HeaderName, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION},
    response::IntoResponse, // (헤더 배열, Json) 튜플을 응답으로 변환
    Json,                   // JSON 응답 래퍼
};
use chrono::Utc;      // 응답의 timestamp 필드
use serde_json::json; // JSON 생성 매크로

/// 프로브 응답의 `service` 필드
pub const PROBE_SERVICE: &str = "cnf-simulator";

/// 프로브 응답에 붙이는 보안 헤더
pub const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (X_XSS_PROTECTION, "1; mode=block"),
];

/// `GET /health` — 서버 상태와 현재 보안 등급을 반환합니다.
///
/// 결과: `{"status": "healthy", "service": "cnf-simulator", "timestamp": ..., "security_rating": "A", "vulnerabilities": 0}`
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // 블록 안에서만 읽기 잠금을 잡고, 필요한 값만 복사해 나옵니다.
    let (rating, vulnerabilities) = {
        let record = state.read_record()?;
        (
            record.security.security_rating.clone(),
            record.security.vulnerabilities,
        )
    };

    // (헤더 배열, 본문) 튜플: Axum이 헤더를 붙인 뒤 본문을 JSON으로 직렬화합니다.
    // Content-Type: application/json 은 Json 래퍼가 설정합니다.
    Ok((
        SECURITY_HEADERS,
        Json(json!({
            "status": "healthy",
            "service": PROBE_SERVICE,
            "timestamp": rfc3339(Utc::now()),
            "security_rating": rating,
            "vulnerabilities": vulnerabilities,
        })),
    ))
}

/// `GET /ready` — 준비 상태를 반환합니다.
///
/// 데이터베이스 같은 외부 의존성이 없으므로, 요청을 받을 수 있으면 곧 준비된 것입니다.
pub async fn readiness_check() -> impl IntoResponse {
    (
        SECURITY_HEADERS,
        Json(json!({
            "status": "ready",
            "service": PROBE_SERVICE,
            "timestamp": rfc3339(Utc::now()),
            "ready": true,
        })),
    )
}
