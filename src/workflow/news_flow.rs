//! 뉴스 수집·요약 플로우
//!
//! 수집: 검색 결과에서 네이버 도메인 기사만 골라 본문을 추출하고 표를
//! 만든다. 요약: 행 하나의 본문을 LLM 으로 요약한다. 빈 본문은 LLM 을
//! 부르지 않고 건너뛴다.

use std::collections::HashMap;
use tracing::info;

use crate::error::ApiError;
use crate::logging::truncate_text;
use crate::models::{SkipReason, Table};
use crate::normalize::extract_article_body;
use crate::parse::parse_summary;
use crate::prompt;
use crate::services::{ChatModel, NaverNewsClient};

/// 뉴스 표의 컬럼명
#[derive(Debug, Clone)]
pub struct NewsColumns {
    pub title: String,
    pub link: String,
    pub time: String,
    pub text: String,
    pub summary: String,
}

impl Default for NewsColumns {
    fn default() -> Self {
        Self {
            title: "제목".to_string(),
            link: "링크".to_string(),
            time: "제공시간".to_string(),
            text: "뉴스본문".to_string(),
            summary: "요약".to_string(),
        }
    }
}

/// 뉴스 수집 플로우
pub struct NewsCrawl<'a> {
    client: &'a NaverNewsClient,
    /// 본문까지 수집할 최대 기사 수
    max_articles: usize,
}

impl<'a> NewsCrawl<'a> {
    pub fn new(client: &'a NaverNewsClient, max_articles: usize) -> Self {
        Self {
            client,
            max_articles,
        }
    }

    /// 검색 → 본문 추출 → 원본 표 구성
    ///
    /// 네이버 도메인 링크만 대상이다. 본문을 가져오지 못한 기사도 행은
    /// 남기되 본문 셀을 비워 둔다 — 행이 조용히 사라지면 안 된다.
    pub async fn collect(&self, query: &str, columns: &NewsColumns) -> Result<Table, ApiError> {
        let items = self.client.search(query).await?;
        info!("검색 결과 {}건, 본문 수집 시작 (최대 {}건)", items.len(), self.max_articles);

        let mut table = Table::new(vec![
            columns.title.clone(),
            columns.link.clone(),
            columns.time.clone(),
            columns.text.clone(),
        ]);

        for item in items {
            if !item.link.contains("naver") {
                continue;
            }

            info!("제목: {}", item.title);
            info!("링크: {}", item.link);

            let body = match self.client.fetch_article_html(&item.link).await {
                Some(html) => match extract_article_body(&html) {
                    Some(body) if !body.is_empty() => {
                        info!("[기사 본문]\n{}", truncate_text(&body, 1000));
                        body
                    }
                    _ => {
                        // 언론사마다 마크업이 달라 앵커가 없으면 의도된 건너뜀이다
                        info!("본문 구조(div#contents > article#dic_area)를 찾지 못했음 (건너뜀)");
                        String::new()
                    }
                },
                None => String::new(),
            };

            table.push_row(HashMap::from([
                (columns.title.clone(), item.title),
                (columns.link.clone(), item.link),
                (columns.time.clone(), item.pub_date),
                (columns.text.clone(), body),
            ]));

            if table.len() >= self.max_articles {
                break;
            }
        }

        Ok(table)
    }
}

/// 본문 한 건 요약
///
/// 빈 본문은 LLM 을 부르지 않고 건너뛴다.
pub async fn summarize_body(
    llm: &dyn ChatModel,
    body: &str,
    max_len: usize,
) -> Result<String, SkipReason> {
    if body.trim().is_empty() {
        return Err(SkipReason::EmptySource);
    }

    let spec = prompt::summarize(body, max_len);
    let raw = llm
        .complete(&spec.system, &spec.user)
        .await
        .map_err(|e| SkipReason::Transport(e.to_string()))?;

    Ok(parse_summary(&raw))
}
