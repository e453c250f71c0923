use serde::{Deserialize, Serialize};

use crate::domain::models::Theme;
use crate::services::validation::ValidationReport;

/// 서명 렌더링 응답 DTO
///
/// HTML은 검증 결과와 무관하게 항상 포함됩니다.
/// `valid`/`errors`는 최상위 필드로 펼쳐집니다.
///
/// ```json
/// { "html": "<table ...>", "theme": "light", "valid": false, "errors": { "company": [...] } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub html: String,
    pub theme: Theme,
    #[serde(flatten)]
    pub validation: ValidationReport,
}
