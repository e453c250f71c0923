//! 이메일 서명 빌더 / 텍스트 케이스 변환 백엔드
//!
//! 두 개의 독립적인 순수 코어와, UI가 JSON으로 코어를 호출할 수 있게 하는
//! 얇은 actix-web 어댑터로 구성됩니다.
//!
//! # Features
//!
//! - **서명 빌더**: 연락처 레코드 → 이메일 클라이언트 호환 테이블 HTML (light/dark 테마)
//! - **케이스 변환**: upper, lower, title, sentence, toggle, alternating,
//!   camel, pascal, snake, kebab, dot, space
//! - **폼 검증**: `validator` 기반 필드 검증, en/ko 메시지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 테마/로케일 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   순수 코어      │ ← builder / engine / validation
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use signcase_backend::domain::models::{ContactRecord, TransformKey};
//! use signcase_backend::services::case::compute_output;
//! use signcase_backend::services::signature::{build_signature_html, SignatureOptions};
//!
//! assert_eq!(compute_output("Hello, world!", false, TransformKey::Snake), "hello_world");
//!
//! let record = ContactRecord {
//!     first_name: "Alex".to_string(),
//!     email_address: "a@b.com".to_string(),
//!     ..Default::default()
//! };
//! let html = build_signature_html(&record, &SignatureOptions::default());
//! assert!(html.contains("mailto:a@b.com"));
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
