//! 개별 케이스/포맷 변환 함수
//!
//! 모두 입력 문자열을 빌려 새 문자열을 만드는 순수 함수입니다.
//! 공백 처리(trim)와 `preserve` 플래그 분기는 [`super::engine`]에서 합니다.

use super::words::{map_word_tokens, split_words};

/// 단어 토큰만 대문자로 바꾸고 구분자는 그대로 둡니다
pub fn upper_words(text: &str) -> String {
    map_word_tokens(text, str::to_uppercase)
}

/// 단어 토큰만 소문자로 바꾸고 구분자는 그대로 둡니다
pub fn lower_words(text: &str) -> String {
    map_word_tokens(text, str::to_lowercase)
}

/// 첫 글자만 대문자, 나머지는 소문자
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// 각 단어 토큰을 소문자로 바꾼 뒤 첫 글자를 대문자로 바꿉니다
pub fn title_case(text: &str) -> String {
    map_word_tokens(text, capitalize)
}

/// 전체를 소문자로 바꾼 뒤, 첫 글자와 `.` `!` `?` 줄바꿈 뒤 첫 글자를 대문자로
///
/// ```rust
/// use signcase_backend::services::case::transforms::sentence_case;
///
/// assert_eq!(sentence_case("HELLO. HOW ARE YOU?\nOK!"), "Hello. How are you?\nOk!");
/// ```
pub fn sentence_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for c in text.to_lowercase().chars() {
        if capitalize_next && c.is_alphabetic() {
            output.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            output.push(c);
        }

        if matches!(c, '.' | '!' | '?' | '\n') {
            capitalize_next = true;
        }
    }

    output
}

/// 모든 문자의 대소문자를 반전합니다. 문자가 아닌 것은 그대로
pub fn toggle_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_uppercase() {
            output.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
    }

    output
}

/// 문자 위치에 따라 소문자/대문자를 번갈아 적용합니다
///
/// 문자가 아닌 것은 카운터를 진행시키지 않으며, 첫 문자는 소문자입니다.
pub fn alternating_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut upper = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if upper {
                output.extend(c.to_uppercase());
            } else {
                output.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            output.push(c);
        }
    }

    output
}

/// `helloWorld`
pub fn camel_case(text: &str) -> String {
    split_words(text)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// `HelloWorld`
pub fn pascal_case(text: &str) -> String {
    split_words(text).into_iter().map(capitalize).collect()
}

/// 소문자 토큰을 구분자로 연결 (`snake_case`, `kebab-case`, `dot.case`)
pub fn delimited(text: &str, delimiter: &str) -> String {
    split_words(text)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// 토큰을 공백 하나로 연결합니다. 각 토큰의 원래 대소문자는 유지됩니다
pub fn space_separated(text: &str) -> String {
    split_words(text).join(" ")
}
