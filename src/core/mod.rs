//! # Core Module
//!
//! HTTP 어댑터 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: JSON 추출기 에러 → `AppError`
//!
//! 서명 빌더와 케이스 엔진은 순수 함수이므로 `AppError`를 반환하지 않습니다.
//! 에러는 요청 경계(핸들러)에서만 생성됩니다.

pub mod errors;

pub use errors::*;
