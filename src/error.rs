//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError`: 요청 처리 중 발생하는 에러. `IntoResponse`로 HTTP 응답이 됩니다.
//! - `ConfigError`: 시작 단계에서 설정을 읽다가 발생하는 에러

use axum::{
    http::{header::ALLOW, HeaderValue, StatusCode}, // Allow 헤더, 헤더 값, HTTP 상태 코드 (404, 405 등)
    response::{IntoResponse, Response},             // Axum의 응답 변환 트레이트
    Json,                                           // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: #[error("...")]로 Display와 Error 트레이트를 자동 구현

// #[derive(Debug, Error)]:
// - Debug: {:?} 포맷으로 출력 가능
// - Error (thiserror): 각 variant의 #[error("...")] 문구가 Display 메시지가 됩니다.

/// 요청 처리 중 발생할 수 있는 에러 종류
///
/// 핸들러나 라우터 fallback이 이 값을 반환하면
/// Axum이 `IntoResponse`를 호출하여 JSON 에러 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 등록되지 않은 경로 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 경로는 있지만 허용되지 않는 메서드 (HTTP 405)
    /// `allowed`는 `Allow` 헤더에 그대로 실립니다.
    #[error("Method not allowed")]
    MethodNotAllowed { allowed: &'static str },

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 결과 본문: `{ "error": { "code": "not_found", "message": "Resource not found" } }`
    fn into_response(self) -> Response {
        // match: variant마다 (상태 코드, 에러 코드, 메시지) 튜플을 만듭니다.
        // `ref msg`로 빌려 쓰므로 self는 이동(move)하지 않고 아래에서 다시 쓸 수 있습니다.
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                self.to_string(),
            ),
            AppError::Internal(ref msg) => {
                // 내부 에러는 로그에만 자세히 남깁니다.
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // (StatusCode, Json<Value>) 튜플은 Axum이 바로 Response로 변환합니다.
        let mut response = (status, body).into_response();
        // 405 응답에는 허용 메서드를 알려주는 Allow 헤더를 붙입니다.
        if let AppError::MethodNotAllowed { allowed } = self {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(allowed));
        }
        response
    }
}

/// 설정 로딩 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}
