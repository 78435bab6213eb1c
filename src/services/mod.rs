//! # 서비스(비즈니스 로직) 모듈
//!
//! HTTP와 무관한 순수 로직을 모아둔 모듈입니다.
//! 핸들러는 여기 함수들을 호출해 응답 값을 만듭니다.
//! - `masking`: 민감한 환경변수 값 마스킹
//! - `security`: 보안 등급 계산, 임계값 검사, 스캔 시뮬레이션

pub mod masking;
pub mod security;

pub use masking::*;
pub use security::*;
