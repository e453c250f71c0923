use serde::{Deserialize, Serialize};

use crate::domain::models::{Locale, TransformFamily, TransformKey};

/// 케이스 변환 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResponse {
    pub output: String,
    pub transform: TransformKey,
    pub preserve: bool,
}

/// 변환 목록의 한 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformInfo {
    pub key: TransformKey,
    pub family: TransformFamily,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformListResponse {
    pub locale: Locale,
    pub transforms: Vec<TransformInfo>,
}
