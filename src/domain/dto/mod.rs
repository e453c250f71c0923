//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 객체입니다. 코어 모델(`ContactRecord`,
//! `TransformKey` 등)은 그대로 직렬화하고, DTO는 요청 봉투와 응답 형태만 정의합니다.
//!
//! ```text
//! dto/
//! ├── signature/   # POST /signature, /signature/validate
//! │   ├── request.rs
//! │   └── response.rs
//! └── case/        # POST /case, GET /case/transforms
//!     ├── request.rs
//!     └── response.rs
//! ```
//!
//! ## 필드 규칙
//! - **선택적 키** (`theme`, `locale`): `Option<String>`으로 받고, 빈 문자열은
//!   [`deserialize_optional_string`](crate::utils::string_utils::deserialize_optional_string)으로 `None` 처리
//! - **알 수 없는 키**: [`parse_or_default`]에서 `AppError::ValidationError`(400)로 거부

use std::str::FromStr;

use crate::core::errors::{AppError, AppResult};

pub mod case;
pub mod signature;

pub use case::*;
pub use signature::*;

/// 요청의 선택적 키를 파싱하고, 값이 없으면 `default`를 사용합니다
///
/// ```rust,ignore
/// let theme: Theme = parse_or_default(request.theme.as_deref(), RenderConfig::default_theme)?;
/// ```
pub fn parse_or_default<T, F>(raw: Option<&str>, default: F) -> AppResult<T>
where
    T: FromStr<Err = String>,
    F: FnOnce() -> T,
{
    match raw {
        Some(value) => value.parse::<T>().map_err(AppError::ValidationError),
        None => Ok(default()),
    }
}
