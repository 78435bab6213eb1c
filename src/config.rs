//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `PORT`: 서버 포트 번호 (기본값: 8080)
//! - `ENVIRONMENT`: 배포 환경 이름 (예: "staging")
//! - `KUBERNETES_NODE_NAME`: 파드가 스케줄된 노드 이름
//! - `SECURITY_SCAN_ENABLED`: 보안 스캔 활성화 여부 ("true"일 때만 활성)
//! - `MINIMUM_SECURITY_RATING`: 허용되는 최저 보안 등급 (예: "B")
//! - `MAX_VULNERABILITIES`: 허용되는 최대 취약점 개수
//! - `APP_*`, `CNF_*`: `/config`로 노출되는 변수들 (민감한 값은 마스킹)

use crate::{error::ConfigError, services};
use std::collections::BTreeMap;
use std::env;

/// 기본 포트. `PORT`가 비어 있거나 없을 때 사용합니다.
pub const DEFAULT_PORT: u16 = 8080;

/// 보안 정책 설정
///
/// 임계값 검사와 스캔 결과 판정에 쓰입니다.
/// 원래 문자열을 그대로 보관하는 이유는 `/security` 응답이
/// 환경변수 값을 가공 없이 보여주기 때문입니다.
#[derive(Debug, Clone, Default)]
pub struct SecurityPolicy {
    /// `SECURITY_SCAN_ENABLED == "true"`
    pub scan_enabled: bool,
    /// `MINIMUM_SECURITY_RATING` 원본 값 (없으면 빈 문자열)
    pub min_security_rating: String,
    /// `MAX_VULNERABILITIES` 원본 값 (없으면 빈 문자열)
    pub max_vulnerabilities: String,
}

impl SecurityPolicy {
    /// 최대 취약점 개수를 정수로 파싱합니다.
    ///
    /// 값이 없거나 정수가 아니면 `None`을 반환하고, 호출 쪽에서 검사를 건너뜁니다.
    pub fn max_vulnerabilities_limit(&self) -> Option<i64> {
        if self.max_vulnerabilities.is_empty() {
            return None;
        }
        self.max_vulnerabilities.parse().ok()
    }
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `Arc`로 감싸
/// 모든 핸들러가 공유합니다. 시작 이후에는 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// `PORT` 원본 값. `/config`에 그대로 보여줍니다.
    pub port_var: String,
    /// `ENVIRONMENT` 원본 값
    pub environment: String,
    /// `KUBERNETES_NODE_NAME` 원본 값 (기본값 치환 전)
    pub kubernetes_node: String,
    pub security: SecurityPolicy,
    /// `APP_`/`CNF_` 접두사 변수들. 민감한 값은 이미 마스킹되어 있습니다.
    /// BTreeMap이라 키 순서가 항상 정렬되어 응답이 안정적입니다.
    pub exposed_vars: BTreeMap<String, String>,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// UTF-8이 아닌 키나 값은 건너뜁니다. (`env::vars()`는 이 경우 panic)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// 임의의 (키, 값) 목록에서 설정을 만듭니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 이 함수로 설정을 구성합니다.
    ///
    /// # 에러
    /// `PORT`가 있는데 포트 번호로 해석할 수 없으면 `ConfigError::InvalidPort`.
    /// 바인딩할 수 없는 포트로는 서버를 띄울 수 없으므로 시작 단계에서 실패시킵니다.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let get = |key: &str| vars.get(key).cloned().unwrap_or_default();

        let port_var = get("PORT");
        let port = if port_var.is_empty() {
            DEFAULT_PORT
        } else {
            port_var
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port_var.clone()))?
        };

        let exposed_vars = services::exposed_env_vars(&vars);

        Ok(Self {
            host: "0.0.0.0".to_string(),
            port,
            environment: get("ENVIRONMENT"),
            kubernetes_node: get("KUBERNETES_NODE_NAME"),
            security: SecurityPolicy {
                scan_enabled: get("SECURITY_SCAN_ENABLED") == "true",
                min_security_rating: get("MINIMUM_SECURITY_RATING"),
                max_vulnerabilities: get("MAX_VULNERABILITIES"),
            },
            exposed_vars,
            port_var,
        })
    }

    /// 리스닝 주소 (`host:port`)
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.port_var, "");
        assert_eq!(config.environment, "");
        assert_eq!(config.kubernetes_node, "");
        assert!(!config.security.scan_enabled);
        assert!(config.exposed_vars.is_empty());
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_known_variables() {
        let config = Config::from_vars([
            ("PORT", "9090"),
            ("ENVIRONMENT", "staging"),
            ("KUBERNETES_NODE_NAME", "worker-1"),
            ("SECURITY_SCAN_ENABLED", "true"),
            ("MINIMUM_SECURITY_RATING", "B"),
            ("MAX_VULNERABILITIES", "2"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.port_var, "9090");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.kubernetes_node, "worker-1");
        assert!(config.security.scan_enabled);
        assert_eq!(config.security.min_security_rating, "B");
        assert_eq!(config.security.max_vulnerabilities_limit(), Some(2));
    }

    #[test]
    fn scan_enabled_requires_exact_true() {
        let config = Config::from_vars([("SECURITY_SCAN_ENABLED", "TRUE")]).unwrap();
        assert!(!config.security.scan_enabled);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_vars([("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "http"));
    }

    #[test]
    fn unparsable_max_vulnerabilities_is_ignored() {
        let config = Config::from_vars([("MAX_VULNERABILITIES", "many")]).unwrap();
        assert_eq!(config.security.max_vulnerabilities, "many");
        assert_eq!(config.security.max_vulnerabilities_limit(), None);
    }

    #[test]
    fn only_prefixed_variables_are_exposed() {
        let config = Config::from_vars([
            ("APP_MODE", "fast"),
            ("CNF_API_KEY", "hunter2"),
            ("HOME", "/root"),
            ("MY_APP_FLAG", "1"),
        ])
        .unwrap();

        let keys: Vec<&str> = config.exposed_vars.keys().map(String::as_str).collect();
        assert_eq!(keys, ["APP_MODE", "CNF_API_KEY"]);
        assert_eq!(config.exposed_vars["APP_MODE"], "fast");
        assert!(config.exposed_vars["CNF_API_KEY"].starts_with("[MASKED:"));
    }
}
