//! HTML 이스케이프
//!
//! 사용자 입력이 마크업에 들어가기 전 반드시 거치는 함수들입니다.
//! 텍스트 노드와 속성값 모두에 같은 규칙을 사용합니다.

/// `& < > " '` 다섯 문자를 HTML 엔티티로 치환합니다
///
/// 한 번의 순회로 치환하므로 새로 만든 엔티티의 `&`가 다시 이스케이프되는
/// 일은 없습니다 (`&`를 먼저 치환하는 것과 같은 결과).
///
/// # 예제
///
/// ```rust
/// use signcase_backend::services::signature::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }

    escaped
}

/// 이스케이프 후 줄바꿈을 `<br>`로 바꿉니다
///
/// `\r\n`과 `\n` 모두 하나의 `<br>`이 되며, 그 외 공백은 그대로 둡니다.
pub fn escape_multiline(value: &str) -> String {
    escape_html(value)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<>"), "&lt;&gt;");
        assert_eq!(escape_html("\"'"), "&quot;&#39;");
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_does_not_double_escape() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("김철수 <대표>"), "김철수 &lt;대표&gt;");
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(escape_multiline("line1\nline2"), "line1<br>line2");
        assert_eq!(escape_multiline("a\r\nb"), "a<br>b");
        assert_eq!(escape_multiline("  keep  spaces <b>\n"), "  keep  spaces &lt;b&gt;<br>");
    }
}
