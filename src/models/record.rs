//! # 서비스 레코드 모델
//!
//! CNF 인스턴스의 현재 상태를 담는 구조체들입니다.
//! 프로세스 시작 시 한 번 만들어지고, 이후 요청들이 일부 필드를 덮어씁니다.
//!
//! ## 불변 필드
//! `id`와 `started_at`은 생성 후 바뀌지 않습니다.
//! 두 필드를 private으로 두고 getter만 공개하여 컴파일 타임에 보장합니다.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// 서비스 이름 (고정값)
pub const SERVICE_NAME: &str = "Simple-CNFSimulator";
/// 서비스 버전 (고정값)
pub const SERVICE_VERSION: &str = "1.0.0";
/// `KUBERNETES_NODE_NAME`이 비어 있을 때 쓰는 노드 이름
pub const UNKNOWN_NODE: &str = "unknown-node";

/// 타임스탬프를 RFC 3339 문자열로 변환합니다. (초 단위, UTC)
///
/// 예: `2026-10-16T08:00:00Z`
pub fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 보안 관련 상태
///
/// `/scan` 호출이 이 값들을 덮어쓰고, `/health`·`/security`·`/status`가 읽습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityInfo {
    /// 마지막 스캔 상태 (예: "completed")
    pub scan_status: String,
    /// 마지막 스캔 시각 (RFC 3339)
    pub last_scan: String,
    /// 발견된 취약점 개수
    pub vulnerabilities: i64,
    /// 보안 등급 ("A" ~ "D")
    pub security_rating: String,
}

impl SecurityInfo {
    /// 시작 시점의 기본 보안 상태: 스캔 완료, 취약점 0개, 등급 A
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            scan_status: "completed".to_string(),
            last_scan: rfc3339(now),
            vulnerabilities: 0,
            security_rating: "A".to_string(),
        }
    }
}

/// CNF 인스턴스 레코드
#[derive(Debug, Clone)]
pub struct ServiceRecord {
    id: String,
    started_at: DateTime<Utc>,
    pub name: &'static str,
    pub version: &'static str,
    /// 현재 상태. 상태 조회 때마다 "running"으로 갱신됩니다.
    pub status: String,
    pub environment: String,
    pub k8s_node: String,
    pub security: SecurityInfo,
}

impl ServiceRecord {
    /// 설정과 시작 시각으로 레코드를 만듭니다.
    ///
    /// ID는 `cnf-<시작 시각의 유닉스 초>` 형식입니다.
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        let k8s_node = if config.kubernetes_node.is_empty() {
            UNKNOWN_NODE.to_string()
        } else {
            config.kubernetes_node.clone()
        };

        Self {
            id: format!("cnf-{}", now.timestamp()),
            started_at: now,
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            status: "running".to_string(),
            environment: config.environment.clone(),
            k8s_node,
            security: SecurityInfo::initial(now),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// 시작 이후 경과한 초. 시계가 뒤로 가더라도 음수가 되지 않습니다.
    pub fn uptime_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }
}
