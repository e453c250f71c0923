//! 서명에 포함되는 아이콘/로고 에셋 생성
//!
//! 외부 이미지 서버에 의존하지 않도록 모든 에셋을 작은 SVG로 합성해
//! 데이터 URI로 인라인합니다. 소셜 아이콘은 둥근 사각형 + 플랫폼 글리프이며
//! 테마별 선 색상으로 두 벌이 만들어집니다.
//!
//! | 에셋 | 인코딩 | 크레이트 |
//! |------|--------|----------|
//! | 소셜 아이콘 | `data:image/svg+xml;charset=utf-8,<퍼센트 인코딩>` | `urlencoding` |
//! | 데모 로고 | `data:image/svg+xml;base64,<base64>` | `base64` |
//!
//! 아이콘 테이블은 첫 접근 시 한 번만 생성되고 이후 변경되지 않습니다.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;

use crate::domain::models::{SocialPlatform, Theme};

/// 소셜 아이콘 한 변의 픽셀 크기
pub const ICON_SIZE: u32 = 24;

/// 로고 한 변의 픽셀 크기
pub const LOGO_SIZE: u32 = 64;

static SOCIAL_ICONS: Lazy<HashMap<(Theme, SocialPlatform), String>> = Lazy::new(|| {
    let mut icons = HashMap::new();

    for theme in Theme::ALL {
        for platform in SocialPlatform::ALL {
            let svg = icon_svg(platform, theme.palette().icon_stroke);
            icons.insert((theme, platform), svg_data_uri(&svg));
        }
    }

    log::debug!("소셜 아이콘 {}개 생성 완료", icons.len());
    icons
});

static DEMO_LOGO: Lazy<String> = Lazy::new(|| {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 64 64">"#,
            r##"<rect width="64" height="64" rx="14" fill="#111827"/>"##,
            r##"<path d="M18 44V20l14 15 14-15v24" fill="none" stroke="#F9FAFB" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/>"##,
            "</svg>"
        ),
        size = LOGO_SIZE
    );

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
});

/// 플랫폼 식별용 글리프 (24×24 viewBox 기준)
fn glyph(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::LinkedIn => {
            r#"<path d="M8 10.5V16"/><path d="M8 7.5v.01"/><path d="M11.5 16v-5.5"/><path d="M11.5 13a2.5 2.5 0 0 1 5 0v3"/>"#
        }
        SocialPlatform::Facebook => {
            r#"<path d="M14.5 7H13a2.5 2.5 0 0 0-2.5 2.5V17"/><path d="M8.5 12h5"/>"#
        }
        SocialPlatform::X => r#"<path d="M7.5 7.5l9 9"/><path d="M16.5 7.5l-9 9"/>"#,
        SocialPlatform::Instagram => {
            r#"<circle cx="12" cy="12" r="3.5"/><path d="M16.5 7.5v.01"/>"#
        }
        SocialPlatform::WhatsApp => {
            r#"<path d="M7.5 16.5l.8-2.6a4.5 4.5 0 1 1 1.8 1.8z"/><path d="M10.5 10.5c0 1.7 1.3 3 3 3"/>"#
        }
    }
}

fn icon_svg(platform: SocialPlatform, stroke: &str) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" "#,
            r#"fill="none" stroke="{stroke}" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">"#,
            r#"<rect x="2.5" y="2.5" width="19" height="19" rx="5"/>{glyph}</svg>"#
        ),
        size = ICON_SIZE,
        stroke = stroke,
        glyph = glyph(platform)
    )
}

fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(svg))
}

/// 테마에 맞는 소셜 아이콘 데이터 URI
pub fn social_icon(theme: Theme, platform: SocialPlatform) -> &'static str {
    SOCIAL_ICONS
        .get(&(theme, platform))
        .map(String::as_str)
        .unwrap_or_default()
}

/// 샘플 레코드용 데모 로고 데이터 URI
pub fn demo_logo() -> &'static str {
    DEMO_LOGO.as_str()
}
