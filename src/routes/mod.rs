//! API 라우트 설정 모듈
//!
//! 서명 빌더와 케이스 변환 API를 기능별 스코프로 묶어 등록합니다.
//! 모든 라우트는 공개(인증 불필요)이며, 요청 빈도 제한은 `main`의
//! Governor 미들웨어가 앱 전체에 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::ServerConfig;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 추출기 설정([`json_config`])도 함께 등록되므로, 테스트에서
/// `App::new().configure(configure_all_routes)`만으로 운영과 같은 에러 형식을 얻습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_signature_routes(cfg);
    configure_case_routes(cfg);
}

/// JSON 본문 추출기 설정
///
/// - 본문 크기 제한: `MAX_PAYLOAD_BYTES` (데이터 URI 로고 업로드 고려)
/// - 파싱 실패는 `AppError`로 변환되어 `{ "error": ... }` 형식으로 응답
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(ServerConfig::max_payload_bytes())
        .error_handler(|err, _req| {
            let error = AppError::from(err);
            log::info!("요청 본문 거부: {}", error);
            error.into()
        })
}

/// 등록되지 않은 경로에 대한 기본 핸들러 (`App::default_service`)
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}

/// 서명 관련 라우트
///
/// - `POST /api/v1/signature` - HTML 생성 + 검증
/// - `POST /api/v1/signature/validate` - 검증만
/// - `GET /api/v1/signature/sample` - 샘플 레코드
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signature \
///   -H "Content-Type: application/json" \
///   -d '{"record":{"firstName":"Alex","lastName":"Johnson","emailAddress":"a@b.com"}}'
/// ```
fn configure_signature_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/signature")
            .service(handlers::signature::render_signature)
            .service(handlers::signature::validate_signature)
            .service(handlers::signature::sample_signature)
    );
}

/// 케이스 변환 라우트
///
/// - `POST /api/v1/case` - 텍스트 변환
/// - `GET /api/v1/case/transforms` - 변환 목록
fn configure_case_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/case")
            .service(handlers::case::convert_case)
            .service(handlers::case::list_transforms)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "signcase_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "features": {
///     "signature": "table-based HTML, light/dark",
///     "case": "12 transforms"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "signature": "table-based HTML, light/dark",
            "case": "12 transforms"
        }
    }))
}
