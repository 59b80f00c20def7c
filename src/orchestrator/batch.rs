//! 배치 러너
//!
//! 항목을 순서대로 하나씩 처리한다. 항목 하나의 실패는 건너뜀으로
//! 기록하고 다음 항목으로 넘어간다 — 배치가 항목 하나 때문에 중단되는
//! 일은 없다. 재시도 전이는 없다: 항목당 시도는 실행당 정확히 한 번이다.

use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::{ItemOutcome, SkipReason, SourceItem};

/// 배치 러너
///
/// 유일한 배치 횡단 상태는 결과 누적 목록과 진행 카운터다. 항목 간
/// 대기는 고정 지연이며 토큰 버킷 같은 적응형 제어가 아니다.
pub struct BatchRunner {
    delay: Duration,
}

impl BatchRunner {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// 항목 목록 처리
    ///
    /// 들어간 항목 수와 돌려주는 결과 수는 항상 같고, 순서는 입력
    /// 순서다. 실패한 항목도 건너뜀 사유와 함께 결과에 남는다.
    pub async fn run<R, F, Fut>(
        &self,
        label: &str,
        items: Vec<SourceItem>,
        mut process: F,
    ) -> Vec<ItemOutcome<R>>
    where
        F: FnMut(SourceItem) -> Fut,
        Fut: Future<Output = Result<R, SkipReason>>,
    {
        let total = items.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            info!("[{}] {}/{} 처리 중…", label, index + 1, total);

            let id = item.id.clone();
            let result = process(item).await;
            if let Err(reason) = &result {
                warn!("[{}] {}/{} 건너뜀 ({}): {}", label, index + 1, total, id, reason);
            }
            outcomes.push(ItemOutcome { id, result });

            // 항목 간 고정 대기 (마지막 항목 뒤에는 불필요)
            if index + 1 < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        outcomes
    }
}
