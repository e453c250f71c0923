//! # 연락처 폼 검증
//!
//! 서명 폼의 필드 검증 규칙입니다. 빌더는 검증 결과와 무관하게 항상 HTML을
//! 만들며, 이 모듈의 결과는 호출자가 "복사" 동작을 허용할지 판단하는 데 쓰입니다.
//!
//! ## 규칙
//!
//! | 술어 | 빈 값 | 비어 있지 않을 때 |
//! |------|-------|-------------------|
//! | [`is_email`] | 무효 | `validator` 이메일 검사 + 도메인에 `.` 포함 (`local@domain.tld`) |
//! | [`is_phone`] | 유효 | 6자 이상, 숫자/`+`/`(`/`)`/`-`/공백만 허용 |
//! | [`is_url_or_domain`] | 유효 | [`normalize_url`] 결과가 URL로 파싱되어야 함 |
//!
//! `validate_*` 함수들은 [`ContactRecord`]의 `#[validate(custom(...))]` 속성에서
//! 호출되며, 에러 코드는 로케일 메시지 테이블의 키와 같습니다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::domain::models::{ContactRecord, Locale, TransformKey};
use crate::services::case::compute_output;
use crate::services::signature::normalize_url;
use crate::utils::string_utils::{is_valid_string, non_blank};

/// 전화번호 최소 길이 (문자 수)
const MIN_PHONE_CHARS: usize = 6;

/// `local@domain.tld` 형태의 이메일인지 확인합니다
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) || !value.validate_email() {
        return false;
    }

    match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|_| domain.split('.').all(|label| !label.is_empty()))
        }
        None => false,
    }
}

/// 전화번호 형식 확인 (빈 값은 선택 항목이므로 유효)
pub fn is_phone(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }

    value.chars().count() >= MIN_PHONE_CHARS
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' '))
}

/// URL 또는 도메인 형식 확인 (빈 값은 선택 항목이므로 유효)
pub fn is_url_or_domain(value: &str) -> bool {
    let normalized = normalize_url(value);
    normalized.is_empty() || normalized.validate_url()
}

fn error(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(error("required"))
    }
}

pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if is_email(value) {
        Ok(())
    } else {
        Err(error("invalid_email"))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_phone(value) {
        Ok(())
    } else {
        Err(error("invalid_phone"))
    }
}

pub fn validate_url_or_domain(value: &str) -> Result<(), ValidationError> {
    if is_url_or_domain(value) {
        Ok(())
    } else {
        Err(error("invalid_url"))
    }
}

pub fn validate_logo_data_uri(value: &str) -> Result<(), ValidationError> {
    match non_blank(value) {
        None => Ok(()),
        Some(uri) if uri.get(..11).is_some_and(|p| p.eq_ignore_ascii_case("data:image/")) => Ok(()),
        Some(_) => Err(error("invalid_data_uri")),
    }
}

/// 필드 하나의 검증 실패 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

/// 폼 전체 검증 결과
///
/// `errors`의 키는 JSON 필드명(camelCase)이며, 정렬된 순서로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationReport {
    fn from_errors(errors: &ValidationErrors, locale: Locale) -> Self {
        let errors: BTreeMap<String, Vec<FieldError>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let entries = field_errors
                    .iter()
                    .map(|e| FieldError {
                        code: e.code.to_string(),
                        message: locale.message(&e.code).to_string(),
                    })
                    .collect();
                // Rust 필드명(snake_case) → JSON 필드명(camelCase)
                (compute_output(&field, false, TransformKey::Camel), entries)
            })
            .collect();

        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// 연락처 레코드를 검증하고 로케일에 맞는 메시지로 보고합니다
pub fn validate_contact(record: &ContactRecord, locale: Locale) -> ValidationReport {
    match record.validate() {
        Ok(()) => ValidationReport {
            valid: true,
            errors: BTreeMap::new(),
        },
        Err(errors) => ValidationReport::from_errors(&errors, locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> ContactRecord {
        ContactRecord {
            first_name: "Alex".to_string(),
            last_name: "Johnson".to_string(),
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            email_address: "alex@acme.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("  first.last+tag@mail.example.co.kr "));
        assert!(!is_email(""));
        assert!(!is_email("alex"));
        assert!(!is_email("alex@localhost"));
        assert!(!is_email("alex@acme."));
        assert!(!is_email("@acme.com"));
        assert!(!is_email("al ex@acme.com"));
    }

    #[test]
    fn test_is_phone() {
        assert!(is_phone(""));
        assert!(is_phone("   "));
        assert!(is_phone("+1 (555) 010-2000"));
        assert!(is_phone("123456"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("555-CALL-NOW"));
        assert!(!is_phone("+1.555.010.2000"));
    }

    #[test]
    fn test_is_url_or_domain() {
        assert!(is_url_or_domain(""));
        assert!(is_url_or_domain("example.com"));
        assert!(is_url_or_domain("https://linkedin.com/in/alex"));
        assert!(is_url_or_domain("mailto:a@b.com"));
        assert!(!is_url_or_domain("not a url"));
        assert!(!is_url_or_domain("http://"));
    }

    #[test]
    fn test_validate_logo_data_uri() {
        assert!(validate_logo_data_uri("").is_ok());
        assert!(validate_logo_data_uri("data:image/png;base64,AAAA").is_ok());
        assert!(validate_logo_data_uri("DATA:IMAGE/svg+xml;base64,AAAA").is_ok());
        assert!(validate_logo_data_uri("data:text/html,<b>x</b>").is_err());
        assert!(validate_logo_data_uri("https://cdn.acme.com/logo.png").is_err());
    }

    #[test]
    fn test_valid_record_passes() {
        let report = validate_contact(&valid_record(), Locale::En);

        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_required_fields_are_reported_in_camel_case() {
        let report = validate_contact(&ContactRecord::default(), Locale::En);

        assert!(!report.valid);
        for field in ["firstName", "lastName", "jobTitle", "company", "emailAddress"] {
            let errors = report.errors.get(field).unwrap_or_else(|| panic!("missing {}", field));
            assert_eq!(errors[0].code, "required");
        }
        assert!(!report.errors.contains_key("department"));
        assert!(!report.errors.contains_key("website"));
    }

    #[test]
    fn test_optional_fields_are_checked_when_present() {
        let mut record = valid_record();
        record.mobile_phone = "call me".to_string();
        record.website = "not a url".to_string();
        record.email_address = "alex@localhost".to_string();

        let report = validate_contact(&record, Locale::Ko);

        assert!(!report.valid);
        assert_eq!(report.errors["mobilePhone"][0].code, "invalid_phone");
        assert_eq!(report.errors["website"][0].code, "invalid_url");
        assert_eq!(report.errors["emailAddress"][0].code, "invalid_email");
        assert_eq!(
            report.errors["emailAddress"][0].message,
            "유효한 이메일 주소를 입력해주세요"
        );
    }
}
