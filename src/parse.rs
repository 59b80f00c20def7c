//! LLM 응답 해석
//!
//! 응답은 세 가지 형태 중 하나로 해석한다: 자유 텍스트(요약), 닫힌 라벨
//! 집합의 번호(분류), JSON 배열(안건 구조화). 모델 출력은 지시를 어길 수
//! 있으므로 형태별로 복구 경로가 다르다 — 분류는 기타 라벨로 흡수하고,
//! 배열은 괄호 구간을 잘라 재시도한다. 괄호 복구는 구조화 목록 전용이며
//! 라벨 해석에는 적용하지 않는다.

use crate::error::ParseError;
use crate::logging::truncate_text;
use crate::models::AgendaRecord;
use crate::prompt::{FALLBACK_TOPIC_LABEL, TOPIC_MAP};
use serde_json::Value;
use tracing::warn;

/// 라벨 해석 결과
///
/// 어떤 입력이든 라벨은 나온다. 다만 "집합과 일치"와 "기타로 흡수"를
/// 구분해 두어 전송 실패와 모델의 무응답을 로그에서 가려낼 수 있게 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOutcome {
    /// 닫힌 라벨 집합과 일치
    Matched(&'static str),
    /// 일치하는 라벨이 없어 기타(6) 처리
    Fallback,
}

impl LabelOutcome {
    /// 출력 표에 기록할 라벨 문자열
    pub fn label(&self) -> &'static str {
        match self {
            LabelOutcome::Matched(label) => label,
            LabelOutcome::Fallback => FALLBACK_TOPIC_LABEL,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LabelOutcome::Fallback)
    }
}

/// 분류 응답을 라벨로 해석한다
///
/// trim 후 마침표를 제거하고("1." 같은 답 방어) 번호 집합과 대조한다.
/// 일치하지 않으면 오류가 아니라 기타 라벨이다 — 분류 결과는 항상
/// 집계 가능한 태그여야 하기 때문이다.
pub fn parse_topic_label(raw: &str) -> LabelOutcome {
    let answer = raw.trim().replace('.', "");
    let answer = answer.trim();

    match TOPIC_MAP.get(answer) {
        Some(&label) => LabelOutcome::Matched(label),
        None => {
            warn!("예측 불가능한 분류 응답, 기타 처리: '{}'", truncate_text(raw, 60));
            LabelOutcome::Fallback
        }
    }
}

/// 요약 응답 해석: 공백 정리만 하는 통과 경로
pub fn parse_summary(raw: &str) -> String {
    raw.trim().to_string()
}

/// 안건 구조화 응답을 레코드 목록으로 해석한다
///
/// 1차: 응답 전체를 JSON 배열로 직접 해석.
/// 2차: 모델이 앞뒤에 설명이나 코드 블록을 붙였을 경우를 대비해 첫 `[` 부터
///      마지막 `]` 까지만 잘라 재시도한다. 최선 노력 복구지 보장이 아니다.
/// 둘 다 실패하거나 최상위가 배열이 아니면 구조 해석 실패 — 해당 항목만
/// 건너뛰고 배치는 계속된다.
pub fn parse_agenda_array(raw: &str, source: &str) -> Result<Vec<AgendaRecord>, ParseError> {
    let value = match serde_json::from_str::<Value>(raw.trim()) {
        Ok(value) => value,
        Err(_) => {
            let repaired = slice_json_array(raw).ok_or_else(|| ParseError::NotJsonArray {
                preview: truncate_text(raw, 200),
            })?;
            serde_json::from_str::<Value>(repaired).map_err(|_| ParseError::NotJsonArray {
                preview: truncate_text(raw, 200),
            })?
        }
    };

    let items = value.as_array().ok_or(ParseError::TopLevelNotArray)?;

    // 배열 요소는 각각 독립된 안건으로 받아들인다. 객체가 아닌 요소만 버린다.
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match AgendaRecord::from_value(source, item) {
            Some(record) => records.push(record),
            None => warn!("{}: {}번째 요소가 객체가 아니라 버림", source, index),
        }
    }

    Ok(records)
}

/// 첫 `[` 부터 마지막 `]` 까지의 구간
fn slice_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}
