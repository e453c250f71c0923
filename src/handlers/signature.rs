//! # Signature HTTP Handlers
//!
//! 서명 HTML 생성과 폼 검증 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/signature` | HTML 생성 + 검증 결과 | 200 OK |
//! | `POST` | `/api/v1/signature/validate` | 검증 결과만 | 200 OK |
//! | `GET` | `/api/v1/signature/sample` | 샘플 연락처 레코드 | 200 OK |
//!
//! 필수 항목 누락 같은 폼 검증 실패는 200 응답의 `valid: false`로 전달되며,
//! 400은 본문 자체를 해석할 수 없을 때(잘못된 JSON, 알 수 없는 테마/로케일)만 사용합니다.

use actix_web::{get, post, web, HttpResponse};
use log::info;

use crate::core::errors::AppError;
use crate::domain::dto::{SignatureRequest, ValidateSignatureRequest};
use crate::services::signature::SignatureService;

/// 서명 HTML 생성 핸들러
///
/// # 요청 예시
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signature \
///   -H "Content-Type: application/json" \
///   -d '{
///     "record": { "firstName": "Alex", "lastName": "Johnson", "emailAddress": "a@b.com" },
///     "theme": "dark",
///     "locale": "ko"
///   }'
/// ```
///
/// # 응답 (200 OK)
/// ```json
/// {
///   "html": "<table cellpadding=\"0\" ...>...</table>",
///   "theme": "dark",
///   "valid": false,
///   "errors": { "company": [{ "code": "required", "message": "필수 입력 항목입니다" }] }
/// }
/// ```
#[post("")]
pub async fn render_signature(
    payload: web::Json<SignatureRequest>,
) -> Result<HttpResponse, AppError> {
    let service = SignatureService::instance();
    let response = service.render(payload.into_inner())?;

    if !response.validation.valid {
        info!(
            "서명 폼 검증 실패: {:?}",
            response.validation.errors.keys().collect::<Vec<_>>()
        );
    }

    Ok(HttpResponse::Ok().json(response))
}

/// 폼 검증 핸들러
#[post("/validate")]
pub async fn validate_signature(
    payload: web::Json<ValidateSignatureRequest>,
) -> Result<HttpResponse, AppError> {
    let report = SignatureService::instance().validate(payload.into_inner())?;

    if !report.valid {
        info!("서명 폼 검증 실패: {:?}", report.errors.keys().collect::<Vec<_>>());
    }

    Ok(HttpResponse::Ok().json(report))
}

/// UI "샘플 불러오기"용 레코드
#[get("/sample")]
pub async fn sample_signature() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(SignatureService::instance().sample_record()))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::domain::dto::SignatureResponse;
    use crate::domain::models::{ContactRecord, Theme};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_render_minimal_record() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signature")
            .set_json(json!({
                "record": { "firstName": "Alex", "lastName": "Johnson", "emailAddress": "a@b.com" },
                "theme": "light"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SignatureResponse = test::read_body_json(resp).await;
        assert_eq!(body.theme, Theme::Light);
        assert!(body.html.contains("Alex Johnson"));
        assert!(body.html.contains("mailto:a@b.com"));
        assert!(!body.validation.valid);
        assert!(body.validation.errors.contains_key("jobTitle"));
        assert!(body.validation.errors.contains_key("company"));
    }

    #[actix_web::test]
    async fn test_render_response_shape_is_flat() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signature")
            .set_json(json!({ "record": {}, "theme": "dark" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["theme"], "dark");
        assert_eq!(body["valid"], false);
        assert!(body["html"].is_string());
        assert!(body["errors"].is_object());
    }

    #[actix_web::test]
    async fn test_render_unknown_theme_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signature")
            .set_json(json!({ "record": {}, "theme": "sepia" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("sepia"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signature")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_validate_endpoint() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/signature/validate")
            .set_json(json!({
                "record": { "firstName": "Alex", "emailAddress": "not-an-email" },
                "locale": "ko"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"]["emailAddress"][0]["code"], "invalid_email");
        assert_eq!(body["errors"]["lastName"][0]["message"], "필수 입력 항목입니다");
        assert!(body.get("html").is_none());
    }

    #[actix_web::test]
    async fn test_sample_endpoint() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/signature/sample").to_request();
        let record: ContactRecord = test::call_and_read_body_json(&app, req).await;

        assert_eq!(record, ContactRecord::sample());
    }
}
