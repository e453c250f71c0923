//! 렌더링 기본값 설정
//!
//! 요청에 테마/로케일이 지정되지 않았을 때 사용할 기본값을 관리합니다.

use std::env;

use crate::domain::models::{Locale, Theme};

pub struct RenderConfig;

impl RenderConfig {
    /// `SIGNATURE_DEFAULT_THEME` (light | dark, 기본값: light)
    pub fn default_theme() -> Theme {
        env::var("SIGNATURE_DEFAULT_THEME")
            .ok()
            .and_then(|value| value.parse::<Theme>().ok())
            .unwrap_or_default()
    }

    /// `DEFAULT_LOCALE` (en | ko, 기본값: en)
    pub fn default_locale() -> Locale {
        env::var("DEFAULT_LOCALE")
            .ok()
            .and_then(|value| value.parse::<Locale>().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults() {
        if env::var("SIGNATURE_DEFAULT_THEME").is_err() {
            assert_eq!(RenderConfig::default_theme(), Theme::Light);
        }

        if env::var("DEFAULT_LOCALE").is_err() {
            assert_eq!(RenderConfig::default_locale(), Locale::En);
        }
    }
}
