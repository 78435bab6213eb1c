//! # 환경변수 마스킹 서비스
//!
//! `/config`로 내보내는 환경변수 중 민감해 보이는 값을 감춥니다.
//!
//! 이 모듈의 함수들:
//! - `is_sensitive_key()`: 키 이름이 민감한 단어를 포함하는지 검사
//! - `mask_sensitive_data()`: 민감한 값이면 해시 기반 토큰으로 치환
//! - `exposed_env_vars()`: `APP_`/`CNF_` 접두사 변수만 골라 마스킹한 맵

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// 키에 이 단어가 (대소문자 무관) 들어 있으면 값을 마스킹합니다.
const SENSITIVE_WORDS: [&str; 5] = ["PASSWORD", "SECRET", "TOKEN", "KEY", "AUTH"];

/// 외부에 노출해도 되는 환경변수의 접두사
const EXPOSED_PREFIXES: [&str; 2] = ["APP_", "CNF_"];

/// 해시 앞부분 몇 바이트를 토큰에 쓸지 (8바이트 → 16진수 16자)
const MASK_HASH_BYTES: usize = 8;

pub fn is_sensitive_key(key: &str) -> bool {
    let upper = key.to_uppercase();
    SENSITIVE_WORDS.iter().any(|word| upper.contains(word))
}

/// 민감한 키의 값을 `[MASKED:<sha256 앞 8바이트 hex>]`로 바꿉니다.
///
/// 같은 값은 항상 같은 토큰이 되므로, 원문을 드러내지 않고도
/// 두 환경의 값이 같은지 비교할 수 있습니다.
/// 민감하지 않은 키는 값을 그대로 돌려줍니다.
pub fn mask_sensitive_data(key: &str, value: &str) -> String {
    if !is_sensitive_key(key) {
        return value.to_string();
    }

    let digest = Sha256::digest(value.as_bytes());
    format!("[MASKED:{}]", hex::encode(&digest[..MASK_HASH_BYTES]))
}

/// `APP_`/`CNF_`로 시작하는 변수만 골라 마스킹된 값으로 모읍니다.
///
/// 접두사 비교는 대소문자를 구분합니다. (`app_mode`는 제외)
pub fn exposed_env_vars<'a, I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    vars.into_iter()
        .filter(|(key, _)| EXPOSED_PREFIXES.iter().any(|p| key.starts_with(p)))
        .map(|(key, value)| (key.clone(), mask_sensitive_data(key, value)))
        .collect()
}
