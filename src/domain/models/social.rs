//! 서명 하단 소셜 아이콘 행에 들어가는 플랫폼 목록

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    LinkedIn,
    Facebook,
    X,
    Instagram,
    WhatsApp,
}

impl SocialPlatform {
    /// 렌더링 순서 (고정)
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Facebook,
        SocialPlatform::X,
        SocialPlatform::Instagram,
        SocialPlatform::WhatsApp,
    ];

    /// `alt`/`title` 속성에 쓰는 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::X => "X",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::WhatsApp => "WhatsApp",
        }
    }
}
