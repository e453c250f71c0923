//! 케이스/포맷 변환 키
//!
//! 12가지 변환은 두 계열로 나뉩니다.
//!
//! | 계열 | 변환 | `preserve` 플래그 |
//! |------|------|-------------------|
//! | 케이스 보존 | upper, lower, title, sentence, toggle, alternating | 적용 |
//! | 구분자 | camel, pascal, snake, kebab, dot, space | 무시 |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKey {
    Upper,
    Lower,
    Title,
    Sentence,
    Toggle,
    Alternating,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Dot,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformFamily {
    CasePreserving,
    Delimiter,
}

impl TransformKey {
    /// UI 노출 순서
    pub const ALL: [TransformKey; 12] = [
        TransformKey::Upper,
        TransformKey::Lower,
        TransformKey::Title,
        TransformKey::Sentence,
        TransformKey::Toggle,
        TransformKey::Alternating,
        TransformKey::Camel,
        TransformKey::Pascal,
        TransformKey::Snake,
        TransformKey::Kebab,
        TransformKey::Dot,
        TransformKey::Space,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformKey::Upper => "upper",
            TransformKey::Lower => "lower",
            TransformKey::Title => "title",
            TransformKey::Sentence => "sentence",
            TransformKey::Toggle => "toggle",
            TransformKey::Alternating => "alternating",
            TransformKey::Camel => "camel",
            TransformKey::Pascal => "pascal",
            TransformKey::Snake => "snake",
            TransformKey::Kebab => "kebab",
            TransformKey::Dot => "dot",
            TransformKey::Space => "space",
        }
    }

    pub fn family(&self) -> TransformFamily {
        match self {
            TransformKey::Upper
            | TransformKey::Lower
            | TransformKey::Title
            | TransformKey::Sentence
            | TransformKey::Toggle
            | TransformKey::Alternating => TransformFamily::CasePreserving,
            TransformKey::Camel
            | TransformKey::Pascal
            | TransformKey::Snake
            | TransformKey::Kebab
            | TransformKey::Dot
            | TransformKey::Space => TransformFamily::Delimiter,
        }
    }
}

impl FromStr for TransformKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TransformKey::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| format!("Unsupported transform: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_key_roundtrip() {
        for key in TransformKey::ALL {
            assert_eq!(key.as_str().parse::<TransformKey>().unwrap(), key);
        }
        assert_eq!("KEBAB".parse::<TransformKey>().unwrap(), TransformKey::Kebab);
        assert!("shout".parse::<TransformKey>().is_err());
    }

    #[test]
    fn test_transform_families() {
        let delimiters: Vec<_> = TransformKey::ALL
            .into_iter()
            .filter(|key| key.family() == TransformFamily::Delimiter)
            .collect();

        assert_eq!(delimiters.len(), 6);
        assert_eq!(TransformKey::Alternating.family(), TransformFamily::CasePreserving);
        assert_eq!(TransformKey::Space.family(), TransformFamily::Delimiter);
    }

    #[test]
    fn test_transform_key_serde() {
        let key: TransformKey = serde_json::from_str("\"pascal\"").unwrap();
        assert_eq!(key, TransformKey::Pascal);
        assert_eq!(
            serde_json::to_string(&TransformFamily::CasePreserving).unwrap(),
            "\"case_preserving\""
        );
    }
}
