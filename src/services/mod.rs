//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 두 서브시스템은 서로 의존하지 않으며 상태도 공유하지 않습니다.
//!
//! - [`signature`]: 연락처 레코드 → 이메일 서명 HTML
//! - [`case`]: 텍스트 케이스/포맷 변환
//! - [`validation`]: 서명 폼 검증 규칙
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{case::CaseService, signature::SignatureService};
//!
//! let case_service = CaseService::instance();
//! let signature_service = SignatureService::instance();
//! ```

pub mod case;
pub mod signature;
pub mod validation;
