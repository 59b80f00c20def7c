//! 로그 초기화 및 표시용 보조 함수

use tracing_subscriber::EnvFilter;

/// tracing 구독자 초기화
///
/// RUST_LOG 환경변수가 있으면 그 필터를, 없으면 info 레벨을 사용한다.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 긴 텍스트를 로그 표시용으로 자른다
///
/// 표시 전용이며 저장되는 값에는 어떤 영향도 주지 않는다.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("짧은 제목", 60), "짧은 제목");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // 멀티바이트 문자 경계에서 잘려도 panic 없이 동작해야 한다
        let text = "동물대체시험기술 개발에 관한 연구";
        let cut = truncate_text(text, 5);
        assert_eq!(cut, "동물대체시...");
    }
}
