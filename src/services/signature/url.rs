//! URL 정규화
//!
//! 사용자가 입력한 웹사이트/소셜 주소에 스킴이 없으면 `https://`를 붙입니다.
//! 도메인 형식 검증은 하지 않으며, 그것은 [`crate::services::validation`]의 몫입니다.

/// 그대로 통과시키는 스킴 (대소문자 무관)
const KNOWN_SCHEMES: [&str; 4] = ["mailto:", "tel:", "http://", "https://"];

/// 입력 문자열을 링크로 쓸 수 있는 URL로 정규화합니다
///
/// - 앞뒤 공백을 제거합니다.
/// - 빈 입력은 빈 문자열을 반환합니다 (호출자는 "필드 없음"으로 취급).
/// - `mailto:`, `tel:`, `http://`, `https://`로 시작하면 그대로 반환합니다.
/// - 그 외에는 `https://`를 앞에 붙입니다.
///
/// # 예제
///
/// ```rust
/// use signcase_backend::services::signature::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("  HTTP://Example.com "), "HTTP://Example.com");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if has_known_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

fn has_known_scheme(value: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// 링크 텍스트용으로 앞쪽 `http://` / `https://`를 제거합니다
///
/// href에는 항상 [`normalize_url`] 결과를 그대로 사용합니다.
pub fn display_url(normalized: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = normalized.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &normalized[scheme.len()..];
            }
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_prefixes_bare_domains() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  www.example.com/about  "), "https://www.example.com/about");
        assert_eq!(normalize_url("linkedin.com/in/alex"), "https://linkedin.com/in/alex");
    }

    #[test]
    fn test_normalize_url_keeps_known_schemes() {
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
        assert_eq!(normalize_url("mailto:a@b.com"), "mailto:a@b.com");
        assert_eq!(normalize_url("Tel:+15551234567"), "Tel:+15551234567");
    }

    #[test]
    fn test_normalize_url_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   \t\n"), "");
    }

    #[test]
    fn test_normalize_url_garbage_is_best_effort() {
        // 검증은 하지 않고 접두사만 붙임
        assert_eq!(normalize_url("not a url"), "https://not a url");
        assert_eq!(normalize_url("ftp://files.example.com"), "https://ftp://files.example.com");
    }

    #[test]
    fn test_normalize_url_multibyte_prefix() {
        // 스킴 길이 경계가 문자 중간에 걸려도 패닉하지 않아야 함
        assert_eq!(normalize_url("한국.kr"), "https://한국.kr");
        assert_eq!(normalize_url("ht"), "https://ht");
    }

    #[test]
    fn test_display_url_strips_protocol() {
        assert_eq!(display_url("https://example.com"), "example.com");
        assert_eq!(display_url("HTTP://example.com/path"), "example.com/path");
        assert_eq!(display_url("mailto:a@b.com"), "mailto:a@b.com");
        assert_eq!(display_url(""), "");
    }
}
