//! 작업 진입점
//!
//! 작업별로 필요한 자격 증명을 검증해 서비스를 만들고(없으면 어떤 항목도
//! 처리하기 전에 중단), 표를 읽어 배치를 돌린 뒤 결과를 한 번에 기록한다.
//! 출력은 끝에서 한 번만 쓴다 — 중간 저장은 하지 않는다.

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::models::{SourceItem, Table};
use crate::normalize::{clean_title, normalize_date};
use crate::orchestrator::batch::BatchRunner;
use crate::prompt::FALLBACK_TOPIC_LABEL;
use crate::services::{
    read_table, write_table, ChatModel, ElsevierClient, LlmService, NaverNewsClient,
};
use crate::workflow::{
    agenda_table, classify_item, fetch_abstract_item, list_pdf_files, structure_agenda_item,
    summarize_body, year_topic_pivot, AbstractColumns, ClassifyColumns, NewsColumns, NewsCrawl,
};

/// 애플리케이션
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn runner(&self) -> BatchRunner {
        BatchRunner::new(self.config.request_delay_ms)
    }

    /// 뉴스 수집 + 요약
    ///
    /// 수집 원본과 요약본을 별도 파일로 남긴다.
    pub async fn run_news(
        &self,
        query: &str,
        raw_output: &Path,
        output: &Path,
        columns: &NewsColumns,
        max_len: usize,
    ) -> Result<()> {
        let naver = NaverNewsClient::new(&self.config)?;
        let llm_service = LlmService::new(&self.config)?;
        let llm: &dyn ChatModel = &llm_service;

        info!("뉴스 검색: {}", query);
        let crawl = NewsCrawl::new(&naver, self.config.max_articles);
        let table = crawl.collect(query, columns).await?;

        if table.is_empty() {
            warn!("수집된 기사가 없습니다");
            return Ok(());
        }

        write_table(raw_output, &table)?;
        info!("수집 원본 저장 → {}", raw_output.display());

        let summarized = self.summarize_news_table(llm, table, columns, max_len).await;
        write_table(output, &summarized)?;
        info!("[DONE] 처리된 표 저장 완료 → {}", output.display());
        Ok(())
    }

    /// 뉴스 표 후처리: 제목 정리, 날짜 정규화, 본문 요약
    pub async fn summarize_news_table(
        &self,
        llm: &dyn ChatModel,
        mut table: Table,
        columns: &NewsColumns,
        max_len: usize,
    ) -> Table {
        // 제목 태그 제거 + 제공시간 → YYYY-MM-DD (해당 컬럼이 있을 때만)
        for row in &mut table.rows {
            if let Some(title) = row.get_mut(&columns.title) {
                let cleaned = clean_title(title);
                *title = cleaned;
            }
            if let Some(time) = row.get_mut(&columns.time) {
                let converted = normalize_date(time);
                *time = converted;
            }
        }

        let items: Vec<SourceItem> = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                SourceItem::new(
                    (index + 1).to_string(),
                    row.get(&columns.text).cloned().unwrap_or_default(),
                )
            })
            .collect();

        let outcomes = self
            .runner()
            .run("요약", items, |item| async move {
                summarize_body(llm, &item.raw_text, max_len).await
            })
            .await;

        for (index, outcome) in outcomes.iter().enumerate() {
            let summary = match &outcome.result {
                Ok(text) => text.clone(),
                Err(_) => String::new(),
            };
            table.set_cell(index, &columns.summary, summary);
        }
        table
    }

    /// 논문 연구주제 분류
    pub async fn run_classify(
        &self,
        input: &Path,
        output: &Path,
        columns: &ClassifyColumns,
    ) -> Result<()> {
        let llm_service = LlmService::new(&self.config)?;
        let llm: &dyn ChatModel = &llm_service;

        let table = read_table(input)?;
        info!("{}행 로드 ← {}", table.len(), input.display());

        let tagged = self.classify_table(llm, table, columns).await;
        write_table(output, &tagged)?;
        info!("[DONE] 저장 완료 → {}", output.display());
        Ok(())
    }

    /// 표의 각 행을 분류하고 태그 컬럼에 기록
    pub async fn classify_table(
        &self,
        llm: &dyn ChatModel,
        mut table: Table,
        columns: &ClassifyColumns,
    ) -> Table {
        table.ensure_column(&columns.tag);

        let items: Vec<SourceItem> = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                SourceItem::new(
                    (index + 1).to_string(),
                    row.get(&columns.abstract_col).cloned().unwrap_or_default(),
                )
                .with_meta("title", row.get(&columns.title).cloned().unwrap_or_default())
                .with_meta(
                    "project",
                    row.get(&columns.project).cloned().unwrap_or_default(),
                )
            })
            .collect();

        let outcomes = self
            .runner()
            .run("분류", items, |item| async move {
                classify_item(llm, &item).await
            })
            .await;

        for (index, outcome) in outcomes.iter().enumerate() {
            // 전송 실패도 기타 라벨로 적는다. 사유 구분은 로그에 남는다.
            let label = match &outcome.result {
                Ok(label_outcome) => label_outcome.label(),
                Err(_) => FALLBACK_TOPIC_LABEL,
            };
            table.set_cell(index, &columns.tag, label);
        }
        table
    }

    /// DOI 기반 초록 수집
    pub async fn run_abstract(
        &self,
        input: &Path,
        output: &Path,
        columns: &AbstractColumns,
    ) -> Result<()> {
        let elsevier = ElsevierClient::new(&self.config)?;

        let table = read_table(input)?;
        info!("{}행 로드 ← {}", table.len(), input.display());

        let enriched = self.enrich_abstract_table(&elsevier, table, columns).await;
        write_table(output, &enriched)?;
        info!("[DONE] 저장 완료 → {}", output.display());
        Ok(())
    }

    /// 표의 각 행에 대해 초록을 조회하고 초록 컬럼에 기록
    pub async fn enrich_abstract_table(
        &self,
        elsevier: &ElsevierClient,
        mut table: Table,
        columns: &AbstractColumns,
    ) -> Table {
        table.ensure_column(&columns.abstract_col);

        let items: Vec<SourceItem> = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                SourceItem::new(
                    (index + 1).to_string(),
                    row.get(&columns.doi).cloned().unwrap_or_default(),
                )
                .with_meta("title", row.get(&columns.title).cloned().unwrap_or_default())
            })
            .collect();

        let outcomes = self
            .runner()
            .run("초록", items, |item| async move {
                fetch_abstract_item(elsevier, &item).await
            })
            .await;

        for (index, outcome) in outcomes.iter().enumerate() {
            let text = match &outcome.result {
                Ok(text) => text.clone(),
                Err(_) => String::new(),
            };
            table.set_cell(index, &columns.abstract_col, text);
        }
        table
    }

    /// 회의 안건 PDF 구조화
    pub async fn run_agenda(&self, folder: &Path, output: &Path) -> Result<()> {
        let llm_service = LlmService::new(&self.config)?;
        let llm: &dyn ChatModel = &llm_service;

        let names = list_pdf_files(folder)?;
        if names.is_empty() {
            warn!("처리할 PDF 가 없습니다: {}", folder.display());
            return Ok(());
        }
        info!("PDF {}건 발견 ← {}", names.len(), folder.display());

        let items: Vec<SourceItem> = names
            .into_iter()
            .map(|name| SourceItem::new(name, ""))
            .collect();

        let outcomes = self
            .runner()
            .run("안건", items, |item| async move {
                structure_agenda_item(llm, folder, &item).await
            })
            .await;

        let records: Vec<_> = outcomes
            .into_iter()
            .filter_map(|outcome| outcome.result.ok())
            .flatten()
            .collect();

        if records.is_empty() {
            warn!("추출된 안건이 없습니다");
            return Ok(());
        }

        let table = agenda_table(&records);
        write_table(output, &table)?;
        info!("[DONE] 총 {}개 안건 저장 완료 → {}", records.len(), output.display());
        Ok(())
    }

    /// 연도별 × 주제별 건수 집계표 생성
    pub fn run_report(
        &self,
        input: &Path,
        output: &Path,
        year_col: &str,
        tag_col: &str,
    ) -> Result<()> {
        let table = read_table(input)?;
        info!("{}행 로드 ← {}", table.len(), input.display());

        let pivot = year_topic_pivot(&table, year_col, tag_col);
        write_table(output, &pivot)?;
        info!("[DONE] 집계표 저장 완료 → {}", output.display());
        Ok(())
    }
}
