//! 호출자 UI가 사용하는 두 로케일의 문자열 테이블
//!
//! 변환 레이블과 검증 메시지만 다룹니다. 테이블은 상수 배열이며
//! 프로세스 수명 동안 변하지 않습니다.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::transform::TransformKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

/// (코드, en, ko)
const MESSAGES: [(&str, &str, &str); 5] = [
    ("required", "This field is required", "필수 입력 항목입니다"),
    ("invalid_email", "Enter a valid email address", "유효한 이메일 주소를 입력해주세요"),
    ("invalid_phone", "Enter a valid phone number", "유효한 전화번호를 입력해주세요"),
    ("invalid_url", "Enter a valid URL or domain", "유효한 URL 또는 도메인을 입력해주세요"),
    ("invalid_data_uri", "Logo must be an embedded image", "로고는 이미지 데이터 URI여야 합니다"),
];

/// (변환, en, ko)
const TRANSFORM_LABELS: [(TransformKey, &str, &str); 12] = [
    (TransformKey::Upper, "UPPER CASE", "대문자"),
    (TransformKey::Lower, "lower case", "소문자"),
    (TransformKey::Title, "Title Case", "단어 첫 글자 대문자"),
    (TransformKey::Sentence, "Sentence case", "문장 첫 글자 대문자"),
    (TransformKey::Toggle, "tOGGLE cASE", "대소문자 반전"),
    (TransformKey::Alternating, "aLtErNaTiNg", "대소문자 교차"),
    (TransformKey::Camel, "camelCase", "카멜 케이스"),
    (TransformKey::Pascal, "PascalCase", "파스칼 케이스"),
    (TransformKey::Snake, "snake_case", "스네이크 케이스"),
    (TransformKey::Kebab, "kebab-case", "케밥 케이스"),
    (TransformKey::Dot, "dot.case", "점 구분"),
    (TransformKey::Space, "space separated", "공백 구분"),
];

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// 검증 에러 코드의 메시지. 모르는 코드는 코드 자체를 돌려줍니다.
    pub fn message<'a>(&self, code: &'a str) -> &'a str {
        MESSAGES
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|&(_, en, ko)| self.pick(en, ko))
            .unwrap_or(code)
    }

    pub fn transform_label(&self, key: TransformKey) -> &'static str {
        TRANSFORM_LABELS
            .iter()
            .find(|(candidate, _, _)| *candidate == key)
            .map(|&(_, en, ko)| self.pick(en, ko))
            .unwrap_or_else(|| key.as_str())
    }

    fn pick(&self, en: &'static str, ko: &'static str) -> &'static str {
        match self {
            Locale::En => en,
            Locale::Ko => ko,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        // "ko-KR", "en_US" 같은 지역 태그는 언어 부분만 사용
        match tag.split(['-', '_']).next().unwrap_or_default() {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}
