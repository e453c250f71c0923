//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 폼 입력 문자열 정리 (빈 값 판정, 조각 연결, serde 헬퍼)
//! - [`display_terminal`] - 시작 배너 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::join_non_blank;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let name = join_non_blank(&["Alex", "Johnson"], " ");
//! print_boxed_title("SIGNCASE BACKEND");
//! ```

pub mod string_utils;
pub mod display_terminal;
