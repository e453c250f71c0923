//! 변환 키 디스패치
//!
//! `(text, preserve, key) → output` 한 번의 호출로 끝나는 상태 없는 변환입니다.
//!
//! | 변환 | `preserve = true` | `preserve = false` |
//! |------|-------------------|--------------------|
//! | upper / lower | 단어 토큰만 변환, 나머지 그대로 | trim 후 문자열 전체 변환 |
//! | title / sentence / toggle / alternating | 원문에 문자 단위 규칙 적용 | trim 후 같은 규칙 적용 |
//! | camel / pascal / snake / kebab / dot / space | 플래그 무시 | 플래그 무시 |

use super::transforms::{
    alternating_case, camel_case, delimited, lower_words, pascal_case, sentence_case,
    space_separated, title_case, toggle_case, upper_words,
};
use crate::domain::models::TransformKey;

/// 입력 문자열에 변환을 적용합니다. 빈 입력은 항상 빈 출력입니다.
pub fn compute_output(text: &str, preserve: bool, key: TransformKey) -> String {
    if text.is_empty() {
        return String::new();
    }

    let subject = if preserve { text } else { text.trim() };

    match key {
        TransformKey::Upper if preserve => upper_words(text),
        TransformKey::Upper => subject.to_uppercase(),
        TransformKey::Lower if preserve => lower_words(text),
        TransformKey::Lower => subject.to_lowercase(),
        TransformKey::Title => title_case(subject),
        TransformKey::Sentence => sentence_case(subject),
        TransformKey::Toggle => toggle_case(subject),
        TransformKey::Alternating => alternating_case(subject),
        TransformKey::Camel => camel_case(text),
        TransformKey::Pascal => pascal_case(text),
        TransformKey::Snake => delimited(text, "_"),
        TransformKey::Kebab => delimited(text, "-"),
        TransformKey::Dot => delimited(text, "."),
        TransformKey::Space => space_separated(text),
    }
}
