//! # 배포 검증 클라이언트
//!
//! 배포된 CNF 시뮬레이터의 엔드포인트가 기대한 대로 응답하는지 확인합니다.
//! CI 파이프라인의 배포 후 단계에서 실행하며, 하나라도 실패하면 0이 아닌 코드로 종료합니다.
//!
//! 기준 URL 결정 순서:
//! 1. 첫 번째 명령행 인자
//! 2. `CNF_BASE_URL` 환경변수
//! 3. `http://localhost:8080`
//!
//! ```bash
//! cnf-validate http://cnf-simulator.staging.svc:8080
//! cnf-validate --help
//! ```

use anyhow::{bail, Context, Result}; // bail!: 에러를 만들어 즉시 반환, Context: 에러에 설명 덧붙이기
use clap::Parser;                    // #[derive(Parser)]: 구조체 정의로 명령행 파서 생성
use reqwest::{Client, StatusCode};   // HTTP 클라이언트와 상태 코드
use serde::{de::DeserializeOwned, Deserialize};
use std::process::ExitCode;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// 명령행 인자
///
/// 각 필드의 `///` 문서 주석이 `--help` 출력의 설명이 됩니다.
#[derive(Debug, Parser)]
#[command(name = "cnf-validate")]
#[command(about = "Validates the endpoints of a deployed CNF simulator")]
#[command(version)]
struct Cli {
    /// Base URL of the service to validate
    #[arg(value_name = "BASE_URL", env = "CNF_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ReadyResponse {
    ready: bool,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    name: String,
    id: String,
    uptime_seconds: i64,
}

/// GET 요청을 보내고 200인지 확인한 뒤 본문을 `T`로 파싱합니다.
async fn fetch<T: DeserializeOwned>(client: &Client, base_url: &str, path: &str) -> Result<T> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to connect to {path} endpoint"))?;

    let status = response.status();
    if status != StatusCode::OK {
        bail!("{path} endpoint returned status code {}", status.as_u16());
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("failed to parse {path} response"))
}

async fn validate_health(client: &Client, base_url: &str) -> Result<String> {
    let health: HealthResponse = fetch(client, base_url, "/health").await?;
    if health.status != "healthy" {
        bail!("health status is not 'healthy': got '{}'", health.status);
    }
    Ok(format!("Health endpoint validation passed: {}", health.status))
}

async fn validate_ready(client: &Client, base_url: &str) -> Result<String> {
    let ready: ReadyResponse = fetch(client, base_url, "/ready").await?;
    if !ready.ready {
        bail!("service reports not ready");
    }
    Ok("Readiness endpoint validation passed".to_string())
}

async fn validate_status(client: &Client, base_url: &str) -> Result<String> {
    let status: StatusResponse = fetch(client, base_url, "/status").await?;
    if status.name.is_empty() {
        bail!("status response missing name field");
    }
    Ok(format!(
        "Status endpoint validation passed: {} ({}, up {}s)",
        status.name, status.id, status.uptime_seconds
    ))
}

/// 검사 결과를 한 줄로 출력하고 통과 여부를 돌려줍니다.
fn report(name: &str, result: Result<String>) -> bool {
    match result {
        Ok(message) => {
            println!("✓ {message}");
            true
        }
        Err(e) => {
            println!("✗ {name} validation failed: {e:#}");
            false
        }
    }
}

/// 세 검사를 순서대로 실행합니다.
///
/// `&&`의 단락 평가(short-circuit) 덕분에 하나가 실패하면 뒤의 요청은 보내지 않습니다.
async fn run_checks(client: &Client, base_url: &str) -> bool {
    report("Health", validate_health(client, base_url).await)
        && report("Readiness", validate_ready(client, base_url).await)
        && report("Status", validate_status(client, base_url).await)
}

#[tokio::main]
async fn main() -> ExitCode {
    // 잘못된 인자나 --help / --version은 clap이 출력 후 종료합니다.
    let cli = Cli::parse();
    let client = Client::new();

    println!("Starting API endpoint validation against {}...", cli.base_url);

    if !run_checks(&client, &cli.base_url).await {
        return ExitCode::FAILURE;
    }

    println!("All API endpoint validations passed!");
    ExitCode::SUCCESS
}
