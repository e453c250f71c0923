//! 서명 HTML 빌더
//!
//! 연락처 레코드를 이메일 클라이언트에 붙여넣을 수 있는 HTML 조각으로 변환합니다.
//! 이메일 클라이언트는 flex/grid 레이아웃과 `<style>` 블록을 안정적으로 지원하지 않으므로
//! 중첩 `<table>` + 인라인 스타일만 사용합니다.
//!
//! ## 출력 구조
//!
//! ```text
//! <table>                         ← 외곽 테이블 (글꼴, 기본 색상)
//! ├── 헤더 행      (로고 | 이름·직함·회사)  ← 로고가 없으면 한 열로 쌓음
//! ├── 연락처 행들  (T / M / E / W / A)     ← 값이 있는 필드만
//! ├── 소셜 아이콘 행                        ← 하나 이상 있을 때만
//! └── 법적 고지 행                          ← 값이 있을 때만
//! ```
//!
//! 모든 블록은 독립적으로 조건부이며, 빈 필드는 빈 행을 남기지 않습니다.
//! 사용자 입력은 텍스트든 `href`/`src` 속성이든 모두 [`escape_html`]을 거칩니다.

use serde::{Deserialize, Serialize};

use super::assets::{social_icon, ICON_SIZE, LOGO_SIZE};
use super::html::{escape_html, escape_multiline};
use super::url::{display_url, normalize_url};
use crate::domain::models::{ContactRecord, Palette, SocialPlatform, Theme};
use crate::utils::string_utils::{join_non_blank, non_blank};

const TABLE_ATTRS: &str = r#"cellpadding="0" cellspacing="0" border="0" role="presentation""#;

/// 직함과 부서 사이 구분자
const JOB_SEPARATOR: &str = " • ";

/// 빌더 옵션. 현재 인식하는 옵션은 `theme` 하나입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureOptions {
    #[serde(default)]
    pub theme: Theme,
}

impl SignatureOptions {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }
}

/// 연락처 레코드로 서명 HTML을 생성합니다
///
/// 실패하지 않는 순수 함수입니다. 잘못된 URL 등은 [`normalize_url`]의
/// 최선 노력 정규화를 거쳐 그대로 렌더링되며, 검증은 호출자의 몫입니다.
pub fn build_signature_html(record: &ContactRecord, options: &SignatureOptions) -> String {
    let palette = options.theme.palette();

    let blocks: Vec<String> = [
        header_block(record, palette),
        contact_block(record, palette),
        social_block(record, options.theme),
        legal_block(record, palette),
    ]
    .into_iter()
    .flatten()
    .collect();

    let html = format!(
        concat!(
            r#"<table {attrs} style="border-collapse:collapse;font-family:Arial,Helvetica,sans-serif;font-size:14px;line-height:1.4;color:{color};">"#,
            "\n{blocks}\n</table>"
        ),
        attrs = TABLE_ATTRS,
        color = palette.primary,
        blocks = blocks.join("\n")
    );

    html.trim().to_string()
}

/// 이름/성을 공백 하나로 합친 전체 이름
pub fn full_name(record: &ContactRecord) -> String {
    join_non_blank(&[record.first_name.as_str(), record.last_name.as_str()], " ")
}

/// 직함과 부서를 " • "로 합친 한 줄
pub fn job_line(record: &ContactRecord) -> String {
    join_non_blank(&[record.job_title.as_str(), record.department.as_str()], JOB_SEPARATOR)
}

/// 로고 소스: 임베디드 데이터 URI가 원격 URL보다 우선
pub fn logo_source(record: &ContactRecord) -> Option<String> {
    non_blank(&record.logo_data_uri)
        .map(str::to_string)
        .or_else(|| non_blank(&record.logo_url).map(normalize_url))
}

fn outer_row(padding: &str, content: &str) -> String {
    format!(r#"<tr><td style="padding:{};">{}</td></tr>"#, padding, content)
}

fn identity_table(record: &ContactRecord, palette: &Palette) -> Option<String> {
    let name = full_name(record);
    let job = job_line(record);

    let mut rows = Vec::new();
    if !name.is_empty() {
        rows.push(format!(
            r#"<tr><td style="padding:0;font-size:18px;font-weight:bold;color:{};">{}</td></tr>"#,
            palette.primary,
            escape_html(&name)
        ));
    }
    if !job.is_empty() {
        rows.push(format!(
            r#"<tr><td style="padding:2px 0 0 0;font-size:14px;color:{};">{}</td></tr>"#,
            palette.secondary,
            escape_html(&job)
        ));
    }
    if let Some(company) = non_blank(&record.company) {
        rows.push(format!(
            r#"<tr><td style="padding:2px 0 0 0;font-size:14px;font-weight:bold;color:{};">{}</td></tr>"#,
            palette.muted,
            escape_html(company)
        ));
    }

    if rows.is_empty() {
        return None;
    }

    Some(format!(
        r#"<table {} style="border-collapse:collapse;">{}</table>"#,
        TABLE_ATTRS,
        rows.concat()
    ))
}

fn header_block(record: &ContactRecord, palette: &Palette) -> Option<String> {
    let identity = identity_table(record, palette);

    let header = match logo_source(record) {
        Some(logo) => {
            let alt = non_blank(&record.company)
                .map(str::to_string)
                .unwrap_or_else(|| full_name(record));
            let alt = if alt.is_empty() { "Logo".to_string() } else { alt };

            let logo_cell = format!(
                concat!(
                    r#"<td style="padding:0 16px 0 0;vertical-align:top;">"#,
                    r#"<img src="{src}" alt="{alt}" width="{size}" height="{size}" "#,
                    r#"style="display:block;width:{size}px;height:{size}px;border:0;border-radius:8px;">"#,
                    "</td>"
                ),
                src = escape_html(&logo),
                alt = escape_html(&alt),
                size = LOGO_SIZE
            );
            let identity_cell = identity
                .map(|table| format!(r#"<td style="padding:0;vertical-align:top;">{}</td>"#, table))
                .unwrap_or_default();

            format!(
                r#"<table {} style="border-collapse:collapse;"><tr>{}{}</tr></table>"#,
                TABLE_ATTRS, logo_cell, identity_cell
            )
        }
        None => identity?,
    };

    Some(outer_row("0", &header))
}

fn tel_href(phone: &str) -> String {
    let mut number = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() || (c == '+' && number.is_empty()) {
            number.push(c);
        }
    }

    if number.is_empty() {
        format!("tel:{}", phone.trim())
    } else {
        format!("tel:{}", number)
    }
}

fn mailto_href(email: &str) -> String {
    let address = match email.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => &email[7..],
        _ => email,
    };
    format!("mailto:{}", address)
}

fn link(href: &str, text: &str, color: &str, external: bool) -> String {
    let target = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };

    format!(
        r#"<a href="{}"{} style="color:{};text-decoration:none;">{}</a>"#,
        escape_html(href),
        target,
        color,
        escape_html(text)
    )
}

fn contact_row(label: &str, content: &str, palette: &Palette) -> String {
    format!(
        concat!(
            r#"<tr><td style="padding:2px 0;font-size:13px;color:{text};">"#,
            r#"<span style="color:{label_color};font-weight:bold;">{label}</span>&nbsp;&nbsp;{content}"#,
            "</td></tr>"
        ),
        text = palette.secondary,
        label_color = palette.subtle,
        label = label,
        content = content
    )
}

fn contact_block(record: &ContactRecord, palette: &Palette) -> Option<String> {
    let mut rows = Vec::new();

    if let Some(phone) = non_blank(&record.office_phone) {
        let content = link(&tel_href(phone), phone, palette.secondary, false);
        rows.push(contact_row("T", &content, palette));
    }
    if let Some(phone) = non_blank(&record.mobile_phone) {
        let content = link(&tel_href(phone), phone, palette.secondary, false);
        rows.push(contact_row("M", &content, palette));
    }
    if let Some(email) = non_blank(&record.email_address) {
        let href = mailto_href(email);
        let content = link(&href, &href["mailto:".len()..], palette.secondary, false);
        rows.push(contact_row("E", &content, palette));
    }
    if let Some(website) = non_blank(&record.website) {
        let href = normalize_url(website);
        let content = link(&href, display_url(&href), palette.secondary, true);
        rows.push(contact_row("W", &content, palette));
    }
    if let Some(address) = non_blank(&record.address) {
        rows.push(contact_row("A", &escape_multiline(address), palette));
    }

    if rows.is_empty() {
        return None;
    }

    let table = format!(
        r#"<table {} style="border-collapse:collapse;">{}</table>"#,
        TABLE_ATTRS,
        rows.concat()
    );
    Some(outer_row("12px 0 0 0", &table))
}

fn social_block(record: &ContactRecord, theme: Theme) -> Option<String> {
    let cells: Vec<String> = SocialPlatform::ALL
        .into_iter()
        .filter_map(|platform| {
            let href = normalize_url(record.social_url(platform));
            if href.is_empty() {
                return None;
            }

            Some(format!(
                concat!(
                    r#"<td style="padding:0 8px 0 0;">"#,
                    r#"<a href="{href}" target="_blank" rel="noopener noreferrer" style="text-decoration:none;">"#,
                    r#"<img src="{src}" alt="{label}" title="{label}" width="{size}" height="{size}" "#,
                    r#"style="display:block;width:{size}px;height:{size}px;border:0;">"#,
                    "</a></td>"
                ),
                href = escape_html(&href),
                src = escape_html(social_icon(theme, platform)),
                label = platform.label(),
                size = ICON_SIZE
            ))
        })
        .collect();

    if cells.is_empty() {
        return None;
    }

    let table = format!(
        r#"<table {} style="border-collapse:collapse;"><tr>{}</tr></table>"#,
        TABLE_ATTRS,
        cells.concat()
    );
    Some(outer_row("12px 0 0 0", &table))
}

fn legal_block(record: &ContactRecord, palette: &Palette) -> Option<String> {
    non_blank(&record.legal_text)?;

    let content = format!(
        r#"<span style="font-size:11px;line-height:1.5;color:{};">{}</span>"#,
        palette.subtle,
        escape_multiline(&record.legal_text)
    );
    Some(outer_row("12px 0 0 0", &content))
}
