//! 서버 및 실행 환경 설정 관리 모듈
//!
//! HTTP 바인딩, 워커 수, CORS, 요청 크기 제한, Rate Limiting 설정을
//! 환경 변수에서 읽어옵니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경 변수 값을 파싱하고, 없거나 잘못된 경우 기본값을 사용합니다
///
/// 파싱 실패는 경고 로그를 남깁니다.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        None => default,
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;
    /// JSON 본문 최대 크기 (데이터 URI 로고를 고려한 값)
    pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn port() -> u16 {
        parse_or("PORT", env::var("PORT").ok(), Self::DEFAULT_PORT)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    pub fn workers() -> usize {
        parse_or("SERVER_WORKERS", env::var("SERVER_WORKERS").ok(), Self::DEFAULT_WORKERS).max(1)
    }

    pub fn max_payload_bytes() -> usize {
        parse_or(
            "MAX_PAYLOAD_BYTES",
            env::var("MAX_PAYLOAD_BYTES").ok(),
            Self::DEFAULT_MAX_PAYLOAD_BYTES,
        )
    }

    /// CORS 허용 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 콤마로 구분된 목록을 지정합니다.
    /// 설정되지 않은 경우 로컬 프론트엔드 개발 서버 주소를 사용합니다.
    pub fn cors_allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    fn parse_origins(raw: Option<String>) -> Vec<String> {
        match raw {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 키 입력마다 재계산하는 UI를 고려해 기본값을 넉넉하게 둡니다.
    pub fn load() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        );

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", per_second, 100u64).max(1),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", burst_size, 200u32).max(1),
        }
    }
}
