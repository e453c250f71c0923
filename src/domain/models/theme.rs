//! 서명 테마와 색상 팔레트
//!
//! 테마는 텍스트 색상(4단계)과 아이콘 선 색상만 바꾸며,
//! 레이아웃이나 조건부 렌더링 규칙에는 영향을 주지 않습니다.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 서명 테마 (기본값: light)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// 테마별 고정 색상표
///
/// `primary` → `subtle` 순으로 강조도가 낮아지는 4단계 텍스트 색상입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub icon_stroke: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    primary: "#111827",
    secondary: "#374151",
    muted: "#6B7280",
    subtle: "#9CA3AF",
    icon_stroke: "#111827",
};

const DARK_PALETTE: Palette = Palette {
    primary: "#F9FAFB",
    secondary: "#E5E7EB",
    muted: "#D1D5DB",
    subtle: "#9CA3AF",
    icon_stroke: "#F9FAFB",
};

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unsupported theme: {}", s)),
        }
    }
}
