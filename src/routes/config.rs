//! # 설정 조회 핸들러
//!
//! - `GET /config` → 주요 환경변수 원본 값과 `APP_`/`CNF_` 변수 목록
//!
//! 민감한 키의 값은 `Config`를 만들 때 이미 마스킹되어 있습니다.

use super::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "config": {
            "port": config.port_var,
            "environment": config.environment,
            "kubernetes_node": config.kubernetes_node,
        },
        "env_vars": config.exposed_vars,
    }))
}
