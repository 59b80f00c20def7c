//! 텍스트 정규화
//!
//! HTML 에서 기사 본문을 추출하고, 제목·날짜·DOI 문자열을 정리한다.
//! 본문 추출은 언론사마다 마크업이 달라 "구조가 맞는 문서만" 처리한다.
//! 구조가 다르면 `None` 을 돌려주는 의도된 건너뜀이지 오류가 아니다.

use chrono::DateTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// 네이버 뉴스 본문 바깥 컨테이너
const CONTENTS_SELECTOR: &str = "div#contents.newsct_body";
/// 본문 영역. 안쪽 앵커까지 있어야 기사로 인정한다.
const ARTICLE_SELECTOR: &str = "article#dic_area.go_trans._article_content";

fn br_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").unwrap())
}

/// 네이버 뉴스 원문 HTML 에서 기사 본문만 추출한다
///
/// `div#contents.newsct_body` 안의 `article#dic_area` 를 찾는다. 둘 중
/// 하나라도 없으면 구조가 다른 문서이므로 `None` (건너뜀).
pub fn extract_article_body(html: &str) -> Option<String> {
    // <br> → 개행. 텍스트로 펼치기 전에 해야 문단 경계가 살아남는다.
    let html = br_regex().replace_all(html, "\n");
    let document = Html::parse_document(&html);

    let contents_sel = Selector::parse(CONTENTS_SELECTOR).unwrap();
    let article_sel = Selector::parse(ARTICLE_SELECTOR).unwrap();

    let contents = document.select(&contents_sel).next()?;
    let article = contents.select(&article_sel).next()?;

    let mut text = String::new();
    collect_text(article, &mut text);

    // 개행 기준으로 정리: 줄 단위 trim, 빈 줄 제거
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Some(lines.join("\n"))
}

/// script/style 하위 트리를 제외하고 텍스트 노드를 모은다
fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if name == "script" || name == "style" {
                continue;
            }
            collect_text(child_el, out);
        }
    }
}

/// 제목 문자열 정리
///
/// 검색 API 가 돌려주는 제목에는 `<b>` 태그와 HTML 엔티티(&quot; 등)가
/// 섞여 있다. 태그를 벗겨내고 엔티티를 복원한 뒤 trim 한다. 항상 성공하며
/// 빈 입력은 빈 문자열이 된다.
pub fn clean_title(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// 날짜 문자열 정규화
///
/// `"Fri, 07 Nov 2025 14:17:00 +0900"` → `"2025-11-07"`.
/// 해석에 실패하면 원문을 그대로 돌려준다 (오류 아님). 따라서 같은 컬럼에
/// 두 형식이 섞일 수 있고, 이미 ISO 형식인 값은 그대로 유지된다.
pub fn normalize_date(raw: &str) -> String {
    match DateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S %z") {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// DOI 문자열 정규화
///
/// `https://doi.org/10.1016/j.cej.2023.145834` → `10.1016/j.cej.2023.145834`.
/// URL 이 아니면 앞뒤 공백/따옴표만 제거한다.
pub fn normalize_doi(raw: &str) -> String {
    let doi = raw.trim();
    if doi.to_ascii_lowercase().starts_with("http") {
        if let Some(pos) = doi.find("://") {
            let rest = &doi[pos + 3..];
            let path = rest.find('/').map(|i| &rest[i + 1..]).unwrap_or("");
            return trim_doi(path);
        }
    }
    trim_doi(doi)
}

fn trim_doi(doi: &str) -> String {
    doi.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'')
        .to_string()
}
