//! 전체 흐름 통합 테스트
//!
//! LLM 전송은 고정 응답 스텁으로 대체해 결정적으로 돌린다. 실제 API 를
//! 부르는 테스트는 `#[ignore]` 로 표시한다:
//! `cargo test -- --ignored`

use async_trait::async_trait;
use std::collections::HashMap;

use doc_enrich::error::LlmError;
use doc_enrich::workflow::{ClassifyColumns, NewsColumns};
use doc_enrich::{App, ChatModel, Config, Table};

/// 항상 같은 응답을 돌려주는 스텁
struct FixedModel {
    reply: String,
}

#[async_trait]
impl ChatModel for FixedModel {
    async fn complete(&self, _system: &[String], _prompt: &str) -> Result<String, LlmError> {
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        "stub"
    }
}

/// 항상 전송 실패하는 스텁
struct FailingModel;

#[async_trait]
impl ChatModel for FailingModel {
    async fn complete(&self, _system: &[String], _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::ApiCallFailed {
            model: "stub".to_string(),
            message: "연결 거부".to_string(),
        })
    }

    fn model(&self) -> &str {
        "stub"
    }
}

fn test_app() -> App {
    let config = Config {
        openai_api_key: Some("test-key".to_string()),
        request_delay_ms: 0,
        ..Config::default()
    };
    App::new(config)
}

fn news_row(title: &str, time: &str, body: &str) -> HashMap<String, String> {
    HashMap::from([
        ("제목".to_string(), title.to_string()),
        ("제공시간".to_string(), time.to_string()),
        ("뉴스본문".to_string(), body.to_string()),
    ])
}

#[tokio::test]
async fn summarize_continues_past_empty_body() {
    let app = test_app();
    let model = FixedModel {
        reply: "핵심 요약".to_string(),
    };

    let mut table = Table::new(vec![
        "제목".to_string(),
        "제공시간".to_string(),
        "뉴스본문".to_string(),
    ]);
    table.push_row(news_row(
        "<b>예산</b> 확대",
        "Fri, 07 Nov 2025 14:17:00 +0900",
        "첫 기사 본문",
    ));
    table.push_row(news_row("둘째 기사", "2025-11-08", ""));
    table.push_row(news_row("셋째 기사", "Sat, 08 Nov 2025 09:00:00 +0900", "셋째 기사 본문"));

    let result = app
        .summarize_news_table(&model, table, &NewsColumns::default(), 150)
        .await;

    // 빈 본문(2행)이 있어도 3행 모두 남는다
    assert_eq!(result.len(), 3);
    assert_eq!(result.cell(0, "요약"), "핵심 요약");
    assert_eq!(result.cell(1, "요약"), "");
    assert_eq!(result.cell(2, "요약"), "핵심 요약");

    // 제목 정리와 날짜 정규화도 함께 적용된다
    assert_eq!(result.cell(0, "제목"), "예산 확대");
    assert_eq!(result.cell(0, "제공시간"), "2025-11-07");
    // 이미 ISO 형식이면 그대로 유지
    assert_eq!(result.cell(1, "제공시간"), "2025-11-08");
}

fn paper_row(title: &str, abstract_text: &str) -> HashMap<String, String> {
    HashMap::from([
        ("논문명".to_string(), title.to_string()),
        ("초록".to_string(), abstract_text.to_string()),
        ("과제명(국문)".to_string(), String::new()),
    ])
}

fn paper_table(n: usize) -> Table {
    let mut table = Table::new(vec![
        "논문명".to_string(),
        "초록".to_string(),
        "과제명(국문)".to_string(),
    ]);
    for i in 1..=n {
        table.push_row(paper_row(&format!("논문 {}", i), &format!("초록 {}", i)));
    }
    table
}

#[tokio::test]
async fn classification_is_deterministic_under_fixed_reply() {
    let app = test_app();
    let model = FixedModel {
        reply: "2".to_string(),
    };

    let result = app
        .classify_table(&model, paper_table(5), &ClassifyColumns::default())
        .await;

    assert_eq!(result.len(), 5);
    for i in 0..5 {
        assert_eq!(result.cell(i, "연구주제태그"), "2. 생활환경화학물질 독성연구");
    }
}

#[tokio::test]
async fn classification_transport_failure_lands_on_catch_all() {
    let app = test_app();

    let result = app
        .classify_table(&FailingModel, paper_table(3), &ClassifyColumns::default())
        .await;

    // 전송이 전부 실패해도 행은 전부 남고 기타 라벨이 적힌다
    assert_eq!(result.len(), 3);
    for i in 0..3 {
        assert_eq!(result.cell(i, "연구주제태그"), "6. 기타");
    }
}

#[tokio::test]
async fn classification_unmatched_reply_lands_on_catch_all() {
    let app = test_app();
    let model = FixedModel {
        reply: "글쎄요, 아마 3번 같습니다".to_string(),
    };

    let result = app
        .classify_table(&model, paper_table(2), &ClassifyColumns::default())
        .await;

    assert_eq!(result.cell(0, "연구주제태그"), "6. 기타");
    assert_eq!(result.cell(1, "연구주제태그"), "6. 기타");
}

#[tokio::test]
async fn agenda_run_skips_unreadable_pdf_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("깨진파일.pdf"), "PDF 아님".as_bytes()).unwrap();
    let output = dir.path().join("agenda_summary.csv");

    let app = test_app();
    // 깨진 PDF 는 원문 없음으로 건너뛰고, 실행 자체는 성공으로 끝난다
    app.run_agenda(dir.path(), &output).await.unwrap();

    // 추출된 안건이 없으므로 출력 파일은 만들지 않는다
    assert!(!output.exists());
}

#[tokio::test]
async fn missing_credentials_abort_before_any_processing() {
    let app = App::new(Config {
        openai_api_key: None,
        ..Config::default()
    });

    // 입력 파일이 존재하지 않아도 자격 증명 검증이 먼저 실패해야 한다
    let err = app
        .run_classify(
            std::path::Path::new("없는파일.xlsx"),
            std::path::Path::new("출력.csv"),
            &ClassifyColumns::default(),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("OPENAI_API_KEY_KIT"));
}

/// 실제 OpenAI API 를 부르는 테스트. 수동 실행 전용:
/// `cargo test classify_real_api -- --ignored --nocapture`
#[tokio::test]
#[ignore]
async fn classify_real_api() {
    doc_enrich::logging::init();

    let config = Config::from_env();
    let app = App::new(config.clone());
    let llm = doc_enrich::LlmService::new(&config).expect("OPENAI_API_KEY_KIT 필요");

    let mut table = Table::new(vec![
        "논문명".to_string(),
        "초록".to_string(),
        "과제명(국문)".to_string(),
    ]);
    table.push_row(paper_row(
        "제브라피시를 이용한 수계 화학물질 생태독성 평가",
        "수생생물 모델을 이용하여 하천 방류수의 생태독성을 평가하였다.",
    ));

    let result = app
        .classify_table(&llm, table, &ClassifyColumns::default())
        .await;

    println!("분류 결과: {}", result.cell(0, "연구주제태그"));
    assert!(!result.cell(0, "연구주제태그").is_empty());
}
