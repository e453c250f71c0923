//! # Case Conversion HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/case` | 텍스트 변환 | 200 OK / 400 (알 수 없는 변환) |
//! | `GET` | `/api/v1/case/transforms` | 변환 목록과 레이블 | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::config::RenderConfig;
use crate::core::errors::AppError;
use crate::domain::dto::{parse_or_default, CaseRequest, TransformsQuery};
use crate::domain::models::Locale;
use crate::services::case::CaseService;

/// 케이스 변환 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/case \
///   -H "Content-Type: application/json" \
///   -d '{"text": "Hello, world!", "transform": "snake", "preserve": false}'
/// ```
///
/// ```json
/// { "output": "hello_world", "transform": "snake", "preserve": false }
/// ```
#[post("")]
pub async fn convert_case(
    payload: web::Json<CaseRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = CaseService::instance().convert(payload.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 변환 목록 핸들러 (`?locale=ko`)
#[get("/transforms")]
pub async fn list_transforms(
    query: web::Query<TransformsQuery>,
) -> Result<HttpResponse, AppError> {
    let locale: Locale = parse_or_default(query.locale.as_deref(), RenderConfig::default_locale)?;

    Ok(HttpResponse::Ok().json(CaseService::instance().transforms(locale)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::domain::dto::{CaseResponse, TransformListResponse};
    use crate::domain::models::{Locale, TransformKey};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_convert_case() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/case")
            .set_json(json!({ "text": "hello world", "transform": "camel" }))
            .to_request();
        let body: CaseResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.output, "helloWorld");
        assert_eq!(body.transform, TransformKey::Camel);
        assert!(!body.preserve);
    }

    #[actix_web::test]
    async fn test_convert_case_with_preserve() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/case")
            .set_json(json!({ "text": "  hello, world  ", "transform": "upper", "preserve": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["output"], "  HELLO, WORLD  ");
        assert_eq!(body["transform"], "upper");
        assert_eq!(body["preserve"], true);
    }

    #[actix_web::test]
    async fn test_unknown_transform_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/case")
            .set_json(json!({ "text": "hello", "transform": "shout" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error: Unsupported transform: shout");
    }

    #[actix_web::test]
    async fn test_empty_transform_fails_validation() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/case")
            .set_json(json!({ "text": "hello", "transform": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_transforms_localized() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/case/transforms?locale=ko")
            .to_request();
        let body: TransformListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.locale, Locale::Ko);
        assert_eq!(body.transforms.len(), 12);
        assert_eq!(body.transforms[8].key, TransformKey::Snake);
        assert_eq!(body.transforms[8].label, "스네이크 케이스");
    }

    #[actix_web::test]
    async fn test_list_transforms_unknown_locale() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/case/transforms?locale=fr")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
