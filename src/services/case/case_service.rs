//! 케이스 변환 서비스
//!
//! 요청 DTO의 변환 키를 해석하고 [`compute_output`]을 호출합니다.
//! 상태가 없으므로 인스턴스는 프로세스 전역 정적 값 하나입니다.

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::{CaseRequest, CaseResponse, TransformInfo, TransformListResponse};
use crate::domain::models::{Locale, TransformKey};

use super::compute_output;

pub struct CaseService;

static CASE_SERVICE: CaseService = CaseService;

impl CaseService {
    pub fn instance() -> &'static Self {
        &CASE_SERVICE
    }

    /// 텍스트에 변환을 적용합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 알 수 없는 변환 키
    pub fn convert(&self, request: CaseRequest) -> AppResult<CaseResponse> {
        let transform = request
            .transform
            .parse::<TransformKey>()
            .map_err(AppError::ValidationError)?;

        let output = compute_output(&request.text, request.preserve, transform);

        log::debug!(
            "🔤 변환 완료: {} (preserve={}, {}자 → {}자)",
            transform.as_str(),
            request.preserve,
            request.text.chars().count(),
            output.chars().count()
        );

        Ok(CaseResponse {
            output,
            transform,
            preserve: request.preserve,
        })
    }

    /// UI 순서대로 12가지 변환과 로케일별 레이블
    pub fn transforms(&self, locale: Locale) -> TransformListResponse {
        let transforms = TransformKey::ALL
            .into_iter()
            .map(|key| TransformInfo {
                key,
                family: key.family(),
                label: locale.transform_label(key).to_string(),
            })
            .collect();

        TransformListResponse { locale, transforms }
    }
}
