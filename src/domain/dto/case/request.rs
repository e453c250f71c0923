use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 케이스 변환 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CaseRequest {
    #[serde(default)]
    pub text: String,

    /// 변환 키 (`upper`, `snake`, ...). 대소문자 무관
    #[validate(length(min = 1, message = "transform is required"))]
    pub transform: String,

    #[serde(default)]
    pub preserve: bool,
}

/// `GET /case/transforms?locale=ko`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub locale: Option<String>,
}
