//! # Domain Models Module
//!
//! 두 도구가 주고받는 값 객체를 정의하는 모듈입니다.
//! 식별자나 생명주기가 없으며, 요청마다 새로 만들어지고 버려집니다.
//!
//! ## 모듈 구성
//!
//! - [`contact`] - 서명 입력 연락처 레코드 (`ContactRecord`)
//! - [`theme`] - 서명 테마와 색상 팔레트 (`Theme`, `Palette`)
//! - [`social`] - 소셜 플랫폼 목록 (`SocialPlatform`)
//! - [`transform`] - 케이스 변환 키와 계열 (`TransformKey`, `TransformFamily`)
//! - [`locale`] - 두 로케일의 레이블/메시지 테이블 (`Locale`)
//!
//! ## 불변성
//!
//! 팔레트, 레이블, 메시지 테이블은 모두 `const`로 정의되어 있으며
//! 런타임에 변경되지 않습니다.

pub mod contact;
pub mod locale;
pub mod social;
pub mod theme;
pub mod transform;

pub use contact::*;
pub use locale::*;
pub use social::*;
pub use theme::*;
pub use transform::*;
