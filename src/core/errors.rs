//! # Application Error Handling System
//!
//! HTTP 어댑터 계층을 위한 통합 에러 처리 시스템입니다.
//! 서명 빌더와 케이스 변환 엔진 자체는 어떤 에러도 발생시키지 않으며,
//! 이 모듈의 에러는 오직 요청 파싱/검증 단계에서만 만들어집니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP 상태 코드 | 발생 지점 |
//! |------|----------------|-----------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON, 알 수 없는 변환 키 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 리소스 |
//! | `PayloadTooLarge` | 413 Payload Too Large | 본문 크기 제한 초과 |
//! | `InternalError` | 500 Internal Server Error | 그 외 예기치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("")]
//! pub async fn convert_case(
//!     payload: web::Json<CaseRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let transform = payload.transform.parse::<TransformKey>()
//!         .map_err(AppError::ValidationError)?;
//!     // ...
//! }
//! ```
//!
//! 응답 형식은 모든 변형에 대해 동일합니다:
//!
//! ```json
//! { "error": "Validation error: Unsupported transform: shout" }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 요청 본문 크기 초과 (413 Payload Too Large)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// JSON 추출기 에러를 `AppError`로 변환합니다
///
/// `web::JsonConfig::error_handler`에 등록되어, 본문 파싱 실패도
/// 다른 에러와 동일한 `{ "error": ... }` 형식으로 응답되도록 합니다.
impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        use actix_web::error::JsonPayloadError;

        match err {
            JsonPayloadError::OverflowKnownLength { length, limit } => AppError::PayloadTooLarge(
                format!("{} bytes exceeds the {} byte limit", length, limit)
            ),
            JsonPayloadError::Overflow { limit } => AppError::PayloadTooLarge(
                format!("body exceeds the {} byte limit", limit)
            ),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
