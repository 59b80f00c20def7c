//! 논문 연구주제 분류 플로우

use tracing::{debug, info};

use crate::logging::truncate_text;
use crate::models::{SkipReason, SourceItem};
use crate::parse::{parse_topic_label, LabelOutcome};
use crate::prompt;
use crate::services::ChatModel;

/// 분류 작업이 읽고 쓰는 컬럼명
#[derive(Debug, Clone)]
pub struct ClassifyColumns {
    pub title: String,
    pub abstract_col: String,
    pub project: String,
    pub tag: String,
}

impl Default for ClassifyColumns {
    fn default() -> Self {
        Self {
            title: "논문명".to_string(),
            abstract_col: "초록".to_string(),
            project: "과제명(국문)".to_string(),
            tag: "연구주제태그".to_string(),
        }
    }
}

/// 논문 한 건 분류
///
/// 전송 실패만 `Err` 다. 응답이 라벨 집합과 일치하지 않는 경우는
/// 해석 단계가 기타 라벨로 흡수하므로 여기서는 실패가 아니다.
/// 두 경우 모두 출력 표에서는 기타 라벨이 되지만 사유는 구분되어 남는다.
pub async fn classify_item(
    llm: &dyn ChatModel,
    item: &SourceItem,
) -> Result<LabelOutcome, SkipReason> {
    info!("분류 중: {}...", truncate_text(item.meta("title"), 60));

    let spec = prompt::classify(item.meta("title"), &item.raw_text, item.meta("project"));
    let raw = llm
        .complete(&spec.system, &spec.user)
        .await
        .map_err(|e| SkipReason::Transport(e.to_string()))?;

    let outcome = parse_topic_label(&raw);
    if let LabelOutcome::Matched(label) = outcome {
        debug!("분류 결과: {}", label);
    }
    Ok(outcome)
}
