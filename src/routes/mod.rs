//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 조립 코드를 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 라이브니스/레디니스 프로브 (`/health`, `/ready`)
//! - `status`: 인스턴스 상태 (`/status`, `/`)
//! - `config`: 설정과 노출 가능한 환경변수 (`/config`)
//! - `info`: 서비스 소개 (`/info`)
//! - `quality`: 품질 지표 (`/quality`)
//! - `security`: 보안 상태와 스캔 (`/security`, `/scan`)

pub mod config;
pub mod health;
pub mod info;
pub mod quality;
pub mod security;
pub mod status;

pub use config::*;
pub use health::*;
pub use info::*;
pub use quality::*;
pub use security::*;
pub use status::*;

use crate::{config::Config, error::AppError, models::ServiceRecord};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tower_http::trace::TraceLayer;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// clone해도 내부 `Arc`만 복제되므로 같은 설정과 레코드를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// 시작 시 읽은 설정 (불변)
    pub config: Arc<Config>,
    /// 인스턴스 레코드. 요청마다 일부 필드를 덮어쓰므로 RwLock으로 감쌉니다.
    record: Arc<RwLock<ServiceRecord>>,
}

impl AppState {
    /// 설정과 시작 시각으로 상태를 만듭니다. 프로세스당 한 번 호출합니다.
    pub fn new(config: Config, started_at: DateTime<Utc>) -> Self {
        let record = ServiceRecord::new(&config, started_at);
        Self {
            config: Arc::new(config),
            record: Arc::new(RwLock::new(record)),
        }
    }

    /// 레코드 읽기 잠금. 잠금은 `.await` 너머로 들고 가지 않습니다.
    pub fn read_record(&self) -> Result<RwLockReadGuard<'_, ServiceRecord>, AppError> {
        self.record
            .read()
            .map_err(|e| AppError::Internal(format!("service record lock poisoned: {e}")))
    }

    /// 레코드 쓰기 잠금
    pub fn write_record(&self) -> Result<RwLockWriteGuard<'_, ServiceRecord>, AppError> {
        self.record
            .write()
            .map_err(|e| AppError::Internal(format!("service record lock poisoned: {e}")))
    }
}

/// 전체 라우터를 조립합니다.
///
/// `/scan`은 POST만 받고, 다른 메서드는 405를 돌려줍니다.
/// 어떤 경로에도 맞지 않는 요청은 404 JSON 에러가 됩니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_status))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/status", get(get_status))
        .route("/config", get(get_config))
        .route("/info", get(get_info))
        .route("/security", get(get_security))
        .route("/quality", get(get_quality))
        .route("/scan", post(trigger_scan).fallback(scan_method_not_allowed))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// 등록되지 않은 경로 → 404
pub async fn not_found() -> AppError {
    AppError::NotFound
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use axum::http::{header::CONTENT_TYPE, StatusCode};

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = router(state_with(&[]));
        let response = send(app, "GET", "/unknown-path").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn root_serves_status() {
        let app = router(state_with(&[("ENVIRONMENT", "dev")]));
        let response = send(app, "GET", "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Simple-CNFSimulator");
        assert_eq!(body["environment"], "dev");
    }

    #[tokio::test]
    async fn every_route_answers_with_json() {
        let app = router(state_with(&[]));
        for uri in [
            "/", "/health", "/ready", "/status", "/config", "/info", "/security", "/quality",
        ] {
            let response = send(app.clone(), "GET", uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(response.headers()[CONTENT_TYPE], "application/json", "{uri}");
        }
    }

    #[tokio::test]
    async fn state_clones_share_the_record() {
        let state = state_with(&[]);
        let other = state.clone();

        state.write_record().unwrap().status = "draining".to_string();
        assert_eq!(other.read_record().unwrap().status, "draining");
    }
}
