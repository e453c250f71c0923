//! # Domain Module
//!
//! 도메인 값 객체(`models`)와 HTTP 요청/응답 DTO(`dto`)를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── models/          ← 연락처, 테마, 변환 키, 로케일
//! └── dto/             ← 데이터 전송 객체 (signature, case)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
