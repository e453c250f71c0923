//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 맞는
//! `.env` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, HTTP 서버, CORS, Rate Limiting 설정
//! - [`render_config`] - 서명 테마/로케일 기본값
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `HOST` | `127.0.0.1` | 바인딩 주소 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `SERVER_WORKERS` | `4` | 워커 스레드 수 |
//! | `MAX_PAYLOAD_BYTES` | `2097152` | JSON 본문 최대 크기 |
//! | `CORS_ALLOWED_ORIGINS` | 로컬 개발 서버 | 콤마로 구분된 Origin 목록 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |
//! | `SIGNATURE_DEFAULT_THEME` | `light` | 서명 기본 테마 |
//! | `DEFAULT_LOCALE` | `en` | 메시지 기본 로케일 |
//!
//! ## 설계 원칙
//!
//! - 설정값 파싱 실패는 패닉 대신 경고 로그 후 기본값 사용
//! - 설정 구조체는 상태가 없는 단위 구조체 + 연관 함수로 구성

pub mod server_config;
pub mod render_config;

pub use server_config::*;
pub use render_config::*;
