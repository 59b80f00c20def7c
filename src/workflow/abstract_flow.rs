//! DOI 기반 초록 수집 플로우

use tracing::info;

use crate::logging::truncate_text;
use crate::models::{SkipReason, SourceItem};
use crate::normalize::normalize_doi;
use crate::services::ElsevierClient;

/// 초록 작업이 읽고 쓰는 컬럼명
#[derive(Debug, Clone)]
pub struct AbstractColumns {
    pub doi: String,
    pub abstract_col: String,
    pub title: String,
}

impl Default for AbstractColumns {
    fn default() -> Self {
        Self {
            doi: "DOI".to_string(),
            abstract_col: "초록".to_string(),
            title: "논문명".to_string(),
        }
    }
}

/// 행 하나의 초록 조회
///
/// DOI 가 없으면 호출 없이 결측 처리. 200 인데 초록이 없는 경우는 정상
/// 빈 결과(`Ok("")`)로, 전송 실패는 `Err` 로 구분한다 — 출력 셀은 둘 다
/// 비지만 로그에는 다르게 남는다.
pub async fn fetch_abstract_item(
    client: &ElsevierClient,
    item: &SourceItem,
) -> Result<String, SkipReason> {
    let doi = normalize_doi(&item.raw_text);

    if doi.is_empty() || doi.eq_ignore_ascii_case("nan") {
        info!("DOI 없음 → 초록 결측 처리 ({})", item.raw_text);
        return Err(SkipReason::EmptySource);
    }

    info!(
        "DOI 조회 중 → {} (norm: {}) | {}...",
        item.raw_text,
        doi,
        truncate_text(item.meta("title"), 50)
    );

    match client.abstract_by_doi(&doi).await {
        Ok(Some(text)) => {
            info!("초록 수집 성공 ({} 문자)", text.chars().count());
            Ok(text)
        }
        Ok(None) => {
            info!("초록 없음 / 접근 불가");
            Ok(String::new())
        }
        Err(e) => Err(SkipReason::Transport(e.to_string())),
    }
}
