//! 서명 입력 연락처 레코드
//!
//! 폼 입력값을 그대로 담는 값 객체입니다. 모든 필드는 문자열이며,
//! 빈 문자열(공백만 있는 경우 포함)은 "값 없음"으로 취급됩니다.
//! 렌더링은 매 입력마다 새 레코드로 수행되며, 빌더는 레코드를 변경하지 않습니다.
//!
//! 필수 항목(이름, 성, 직함, 회사, 이메일)은 HTML 생성 자체를 막지 않고,
//! [`Validate`] 결과로만 보고됩니다. 호출자는 이 결과로 "복사" 동작을 제어합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::social::SocialPlatform;
use crate::services::signature::assets::demo_logo;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    #[validate(custom(function = "crate::services::validation::validate_required"))]
    pub first_name: String,

    #[validate(custom(function = "crate::services::validation::validate_required"))]
    pub last_name: String,

    #[validate(custom(function = "crate::services::validation::validate_required"))]
    pub job_title: String,

    pub department: String,

    #[validate(custom(function = "crate::services::validation::validate_required"))]
    pub company: String,

    #[validate(custom(function = "crate::services::validation::validate_phone"))]
    pub office_phone: String,

    #[validate(custom(function = "crate::services::validation::validate_phone"))]
    pub mobile_phone: String,

    #[validate(custom(function = "crate::services::validation::validate_email_address"))]
    pub email_address: String,

    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub website: String,

    pub address: String,

    /// 원격 로고 이미지 주소
    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub logo_url: String,

    /// 업로드된 로고 (`data:image/...`). `logo_url`보다 우선합니다.
    #[validate(custom(function = "crate::services::validation::validate_logo_data_uri"))]
    pub logo_data_uri: String,

    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub linkedin: String,

    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub facebook: String,

    /// X (구 Twitter)
    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub twitter: String,

    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub instagram: String,

    #[validate(custom(function = "crate::services::validation::validate_url_or_domain"))]
    pub whatsapp: String,

    pub legal_text: String,
}

impl ContactRecord {
    pub fn social_url(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::X => &self.twitter,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::WhatsApp => &self.whatsapp,
        }
    }

    /// UI의 "샘플 불러오기"용 예시 레코드 (데모 로고 + 소셜 링크 2개)
    pub fn sample() -> Self {
        Self {
            first_name: "Alex".to_string(),
            last_name: "Johnson".to_string(),
            job_title: "Product Designer".to_string(),
            department: "Design".to_string(),
            company: "Acme Corporation".to_string(),
            office_phone: "+1 (555) 010-2000".to_string(),
            mobile_phone: "+1 (555) 010-3000".to_string(),
            email_address: "alex.johnson@acme.com".to_string(),
            website: "www.acme.com".to_string(),
            address: "100 Market Street, San Francisco, CA".to_string(),
            logo_data_uri: demo_logo().to_string(),
            linkedin: "linkedin.com/in/alexjohnson".to_string(),
            twitter: "x.com/alexjohnson".to_string(),
            legal_text: "This email and any attachments are confidential.\nIf you received it in error, please delete it.".to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ContactRecord =
            serde_json::from_str(r#"{"firstName": "Alex", "emailAddress": "a@b.com"}"#).unwrap();

        assert_eq!(record.first_name, "Alex");
        assert_eq!(record.email_address, "a@b.com");
        assert_eq!(record.last_name, "");
        assert_eq!(record.legal_text, "");
    }

    #[test]
    fn test_social_url_lookup() {
        let record = ContactRecord {
            twitter: "x.com/alex".to_string(),
            whatsapp: "wa.me/15551234567".to_string(),
            ..Default::default()
        };

        assert_eq!(record.social_url(SocialPlatform::X), "x.com/alex");
        assert_eq!(record.social_url(SocialPlatform::WhatsApp), "wa.me/15551234567");
        assert_eq!(record.social_url(SocialPlatform::LinkedIn), "");
    }

    #[test]
    fn test_sample_record() {
        let sample = ContactRecord::sample();

        assert_eq!(sample.first_name, "Alex");
        assert_eq!(sample.last_name, "Johnson");
        assert!(sample.logo_data_uri.starts_with("data:image/svg+xml;base64,"));

        let social_count = SocialPlatform::ALL
            .iter()
            .filter(|platform| !sample.social_url(**platform).is_empty())
            .count();
        assert_eq!(social_count, 2);
    }
}
