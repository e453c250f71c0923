use serde::Deserialize;

use crate::domain::models::ContactRecord;
use crate::utils::string_utils::deserialize_optional_string;

/// 서명 렌더링 요청 DTO
///
/// `theme`/`locale`이 비어 있으면 서버 기본값(`RenderConfig`)을 사용합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignatureRequest {
    #[serde(default)]
    pub record: ContactRecord,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub theme: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub locale: Option<String>,
}

/// 폼 검증 전용 요청 DTO
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateSignatureRequest {
    #[serde(default)]
    pub record: ContactRecord,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub locale: Option<String>,
}
