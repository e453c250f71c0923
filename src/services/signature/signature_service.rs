//! 서명 서비스
//!
//! 요청의 테마/로케일을 해석하고, HTML 생성과 폼 검증을 한 번에 수행합니다.
//! 검증 실패는 에러가 아니라 응답의 `valid`/`errors` 필드로 전달됩니다.

use crate::config::RenderConfig;
use crate::core::errors::AppResult;
use crate::domain::dto::{
    parse_or_default, SignatureRequest, SignatureResponse, ValidateSignatureRequest,
};
use crate::domain::models::{ContactRecord, Locale, Theme};
use crate::services::validation::{validate_contact, ValidationReport};

use super::{build_signature_html, SignatureOptions};

pub struct SignatureService;

static SIGNATURE_SERVICE: SignatureService = SignatureService;

impl SignatureService {
    pub fn instance() -> &'static Self {
        &SIGNATURE_SERVICE
    }

    /// 서명 HTML을 만들고 폼 검증 결과를 함께 반환합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 알 수 없는 테마 또는 로케일
    pub fn render(&self, request: SignatureRequest) -> AppResult<SignatureResponse> {
        let theme: Theme = parse_or_default(request.theme.as_deref(), RenderConfig::default_theme)?;
        let locale: Locale =
            parse_or_default(request.locale.as_deref(), RenderConfig::default_locale)?;

        let html = build_signature_html(&request.record, &SignatureOptions::with_theme(theme));
        let validation = validate_contact(&request.record, locale);

        log::debug!(
            "✉️ 서명 생성: theme={}, {} bytes, 검증 오류 필드 {}개",
            theme.as_str(),
            html.len(),
            validation.errors.len()
        );

        Ok(SignatureResponse {
            html,
            theme,
            validation,
        })
    }

    /// HTML 없이 폼 검증만 수행합니다
    pub fn validate(&self, request: ValidateSignatureRequest) -> AppResult<ValidationReport> {
        let locale: Locale =
            parse_or_default(request.locale.as_deref(), RenderConfig::default_locale)?;

        Ok(validate_contact(&request.record, locale))
    }

    pub fn sample_record(&self) -> ContactRecord {
        ContactRecord::sample()
    }
}
