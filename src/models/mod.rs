//! # 데이터 모델 모듈
//!
//! 응답과 상태에 쓰이는 데이터 구조체(struct)들을 정의합니다.
//! - `record`: CNF 인스턴스 레코드와 보안 상태
//! - `quality`: 고정된 품질 지표
//!
//! `pub use X::*;`로 재공개하므로 `crate::models::ServiceRecord`처럼 짧게 접근할 수 있습니다.

pub mod quality;
pub mod record;

pub use quality::*;
pub use record::*;
