//! # CNF 시뮬레이터 진입점
//!
//! 클라우드 네이티브 네트워크 기능(CNF)을 흉내 내는 상태 서비스입니다.
//! 실제 패킷 처리는 하지 않고, CI/CD 파이프라인과 쿠버네티스 프로브가
//! 확인할 수 있는 JSON 상태 정보만 제공합니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩과 인스턴스 레코드 생성
//! 4. 라우터 설정
//! 5. HTTP 서버 시작

// ── 외부 크레이트 및 라이브러리 모듈 가져오기 ──
// 핸들러와 설정은 `src/lib.rs`가 공개하는 `cnf_simulator` 라이브러리에 있습니다.
// 검증 클라이언트도 같은 라이브러리를 쓰므로 모듈을 한 곳에만 둡니다.
use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use chrono::Utc; // 현재 시각(UTC). 인스턴스 시작 시각으로 기록됩니다.
use cnf_simulator::{
    config::Config,  // 환경변수에서 읽은 설정
    routes::{self, AppState}, // 라우터 조립 함수와 공유 상태
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임을 만들고 그 안에서 main을 실행하는 매크로
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 환경변수를 읽어옵니다. (예: PORT, MAX_VULNERABILITIES)
    // .ok()로 Result를 버리므로 .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // registry()에 필터와 포맷터를 레이어처럼 쌓아올립니다.
    tracing_subscriber::registry()
        .with(
            // RUST_LOG가 없으면 이 크레이트와 HTTP 계층을 debug 레벨로 출력합니다.
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cnf_simulator=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩과 상태 생성 ──
    // `?`: PORT가 잘못되었으면 여기서 에러를 반환하고 프로세스가 종료됩니다.
    let config = Config::from_env()?;
    let addr = config.listen_addr();
    // 레코드의 ID와 시작 시각은 여기서 한 번만 정해집니다.
    // config는 AppState 안으로 이동(move)하므로 addr을 먼저 꺼내 두었습니다.
    let state = AppState::new(config, Utc::now());

    // 블록 `{ ... }`을 끝내면 읽기 잠금(guard)이 해제됩니다.
    {
        let record = state.read_record()?;
        tracing::info!("Starting CNF Simulator on port {}", state.config.port);
        tracing::info!("CNF Instance ID: {}", record.id());
        tracing::info!("Running on Kubernetes Node: {}", record.k8s_node);
        tracing::info!("Environment: {}", record.environment);
    }

    // ── 4단계: 라우터 설정 ──
    // state는 라우터로 이동하고, 핸들러들은 State<AppState>로 꺼내 씁니다.
    let app = routes::router(state);

    // ── 5단계: 서버 시작 ──
    // TcpListener::bind(): 지정된 주소에서 연결을 받기 시작합니다.
    // 바인딩 실패는 재시도 없이 `?`로 전파되어 프로세스를 종료시킵니다.
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // axum::serve(): 이 줄에서 서버가 종료될 때까지 요청을 처리합니다.
    axum::serve(listener, app).await?;

    Ok(())
}
