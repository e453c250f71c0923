//! 단어 토큰 분리
//!
//! 두 가지 토큰 규칙이 있습니다.
//!
//! - **단어 토큰**: 문자로 시작하는 최대 길이의 영숫자 연속 (케이스 보존 계열)
//! - **구분자 토큰**: 영숫자가 아닌 문자 연속으로 나눈 조각 (구분자 계열)
//!
//! 두 규칙 모두 유니코드 기준 (`char::is_alphabetic` / `char::is_alphanumeric`)입니다.

/// 단어 토큰만 `transform`으로 바꾸고 나머지 문자는 그대로 둡니다
///
/// 숫자로 시작하는 영숫자 연속은 첫 문자가 나올 때부터 토큰이 됩니다
/// (`"3d"`에서는 `"d"`가 토큰).
pub fn map_word_tokens<F>(text: &str, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len());
    let mut token_start: Option<usize> = None;

    for (index, c) in text.char_indices() {
        match token_start {
            Some(start) if !c.is_alphanumeric() => {
                output.push_str(&transform(&text[start..index]));
                token_start = None;
                output.push(c);
            }
            Some(_) => {}
            None if c.is_alphabetic() => token_start = Some(index),
            None => output.push(c),
        }
    }

    if let Some(start) = token_start {
        output.push_str(&transform(&text[start..]));
    }

    output
}

/// 영숫자가 아닌 문자 연속을 기준으로 나누고 빈 조각은 버립니다
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_word_tokens_preserves_separators() {
        let output = map_word_tokens("  hello, world!  ", |word| format!("[{}]", word));
        assert_eq!(output, "  [hello], [world]!  ");
    }

    #[test]
    fn test_map_word_tokens_tokens_start_with_letter() {
        let output = map_word_tokens("3d a1b 42", |word| format!("[{}]", word));
        assert_eq!(output, "3[d] [a1b] 42");
    }

    #[test]
    fn test_map_word_tokens_unicode() {
        let output = map_word_tokens("héllo мир", |word| word.to_uppercase());
        assert_eq!(output, "HÉLLO МИР");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(split_words("  --foo__bar.baz  "), vec!["foo", "bar", "baz"]);
        assert_eq!(split_words("version 2.0 rc1"), vec!["version", "2", "0", "rc1"]);
        assert!(split_words("").is_empty());
        assert!(split_words("!!! ---").is_empty());
    }
}
