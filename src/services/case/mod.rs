//! # 케이스/포맷 변환 엔진
//!
//! 12가지 문자열 변환을 키로 선택해 적용하는 순수 함수 모음입니다.
//!
//! - [`words`]: 단어 토큰 규칙
//! - [`transforms`]: 개별 변환 함수
//! - [`engine`]: `(text, preserve, key)` 디스패치 ([`compute_output`])
//! - [`case_service`]: HTTP 핸들러가 사용하는 서비스 진입점

pub mod case_service;
pub mod engine;
pub mod transforms;
pub mod words;

pub use case_service::CaseService;
pub use engine::compute_output;
