//! # CNF 시뮬레이터 라이브러리
//!
//! 서버 실행 파일(`main.rs`)과 배포 검증 클라이언트(`bin/validate.rs`)가
//! 함께 쓰는 모듈들을 공개합니다.
//!
//! - `config`: 환경변수 기반 설정
//! - `error`: HTTP 응답으로 변환되는 에러 타입
//! - `models`: 서비스 레코드와 품질 지표
//! - `routes`: 핸들러, 공유 상태(`AppState`), 라우터 조립
//! - `services`: 마스킹·보안 판정 같은 순수 로직

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
