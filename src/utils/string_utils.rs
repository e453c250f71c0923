//! # 문자열 유틸리티
//!
//! 폼 입력값 처리와 관련된 공통 유틸리티 함수들입니다.
//! 빈 문자열과 공백만 있는 문자열은 모두 "값 없음"으로 취급합니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거한 값이 비어 있지 않으면 그 값을 반환합니다
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::non_blank;
///
/// assert_eq!(non_blank("  Alex "), Some("Alex"));
/// assert_eq!(non_blank("   "), None);
/// ```
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// 비어 있지 않은 조각들만 정리해서 구분자로 연결합니다
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(join_non_blank(&["Alex", " ", "Johnson"], " "), "Alex Johnson");
/// assert_eq!(join_non_blank(&["", "EMEA"], " • "), "EMEA");
/// ```
pub fn join_non_blank(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|part| non_blank(part))
        .collect::<Vec<_>>()
        .join(separator)
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| non_blank(&s).map(str::to_string))
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `"locale": ""` 처럼 비어 있는 값을 `None`으로 바꿔, 기본값 적용 로직이
/// 한 곳(`Option::None`)만 보면 되도록 합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     locale: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("Hello"), Some("Hello"));
        assert_eq!(non_blank("  World  "), Some("World"));
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("\t\n"), None);
    }

    #[test]
    fn test_join_non_blank() {
        assert_eq!(join_non_blank(&["Alex", "Johnson"], " "), "Alex Johnson");
        assert_eq!(join_non_blank(&[" Alex ", "  "], " "), "Alex");
        assert_eq!(join_non_blank(&["", "EMEA"], " • "), "EMEA");
        assert_eq!(join_non_blank(&["", ""], " "), "");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            locale: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"locale": "  ko  "}"#).unwrap();
        assert_eq!(result.locale, Some("ko".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"locale": ""}"#).unwrap();
        assert_eq!(result.locale, None);

        let result: TestStruct = serde_json::from_str(r#"{"locale": null}"#).unwrap();
        assert_eq!(result.locale, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.locale, None);
    }
}
