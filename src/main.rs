//! 서명 빌더 / 케이스 변환 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 코어 로직은 모두 순수 함수이므로
//! 외부 저장소 초기화 없이 설정 로드 후 바로 서버를 시작합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use signcase_backend::config::{Environment, RateLimitConfig, RenderConfig, ServerConfig};
use signcase_backend::routes::{configure_all_routes, not_found};
use signcase_backend::utils::display_terminal::{print_boxed_title, print_sub_task};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 서명/케이스 변환 서비스 시작중...");

    print_startup_summary();

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/{{signature,case}}", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = ServerConfig::cors_allowed_origins();

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
            .default_service(web::to(not_found))
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 변환/렌더링마다 debug 로그 출력
/// RUST_LOG=signcase_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 시작 시 적용된 설정을 터미널에 요약합니다
fn print_startup_summary() {
    let environment = Environment::current();

    print_boxed_title("✉️ SIGNCASE BACKEND");
    print_sub_task("Environment", &format!("{:?}", environment));
    print_sub_task("Bind", &ServerConfig::bind_address());
    print_sub_task("Workers", &ServerConfig::workers().to_string());
    print_sub_task("Max payload", &format!("{} bytes", ServerConfig::max_payload_bytes()));
    print_sub_task("Default theme", RenderConfig::default_theme().as_str());
    print_sub_task("Default locale", RenderConfig::default_locale().as_str());
    if !environment.is_production() {
        print_sub_task("CORS origins", &ServerConfig::cors_allowed_origins().join(", "));
    }
    println!();
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽으며, 기본값은
/// 로컬 프론트엔드 개발 서버(3000, 5173 포트)입니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
