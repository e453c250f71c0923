//! # 이메일 서명 빌더
//!
//! 연락처 레코드와 테마로 이메일 클라이언트 호환 HTML 서명을 만듭니다.
//! 모든 자산(아이콘, 데모 로고)은 프로세스 안에서 생성되며 외부 요청은 없습니다.
//!
//! - [`url`]: URL 정규화와 표시용 텍스트
//! - [`html`]: HTML 이스케이프
//! - [`assets`]: 테마별 소셜 아이콘과 데모 로고 데이터 URI
//! - [`builder`]: 테이블 기반 HTML 조립
//! - [`signature_service`]: HTTP 핸들러가 사용하는 서비스 진입점

pub mod assets;
pub mod builder;
pub mod html;
pub mod signature_service;
pub mod url;

pub use builder::{build_signature_html, SignatureOptions};
pub use html::escape_html;
pub use signature_service::SignatureService;
pub use url::normalize_url;
