//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 JSON 응답을 돌려주는 핸들러들입니다.
//! 핸들러는 상태를 갖지 않으며, 서비스 싱글톤(`Service::instance()`)을 호출합니다.
//!
//! ```text
//! Client (서명/케이스 변환 UI)
//!        │ JSON
//!        ▼
//! Handlers (이 모듈)      ← 요청 파싱, 상태 코드
//!        │
//!        ▼
//! Services               ← 테마/로케일 해석, 코어 호출
//!        │
//!        ▼
//! 순수 코어 (builder, engine, validation)
//! ```
//!
//! 에러는 모두 [`AppError`](crate::core::errors::AppError)로 반환되며
//! `{ "error": "..." }` 형식으로 직렬화됩니다.
//!
//! - **`signature`**: 서명 생성/검증/샘플
//! - **`case`**: 케이스 변환과 변환 목록

pub mod case;
pub mod signature;
