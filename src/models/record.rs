//! 파이프라인을 흐르는 데이터 단위
//!
//! `SourceItem` 은 입력 한 건(웹 페이지, PDF, 표의 행)이다. 생성 후에는
//! 변경하지 않으며, `id` 는 같은 배치를 다시 돌려도 동일해야 결과를
//! 대조할 수 있다 (행 번호, 파일명, URL 등).

use serde_json::Value;
use std::collections::HashMap;

/// 입력 한 건
#[derive(Debug, Clone)]
pub struct SourceItem {
    /// 항목 식별자 (행 번호 / 파일명 / URL)
    pub id: String,
    /// 원문 텍스트 (본문, 초록, DOI 등 작업이 정의)
    pub raw_text: String,
    /// 부가 필드 (제목, 과제명 등)
    pub metadata: HashMap<String, String>,
}

impl SourceItem {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
            metadata: HashMap::new(),
        }
    }

    /// 부가 필드를 추가한 뒤 자신을 돌려준다
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// 부가 필드 조회. 없으면 빈 문자열.
    pub fn meta(&self, key: &str) -> &str {
        self.metadata.get(key).map(String::as_str).unwrap_or("")
    }
}

/// 회의 안건 레코드 한 건
///
/// 추출 필드는 전부 선택이다. 누락 필드는 빈 문자열이 아니라 `None` 으로
/// 남겨 "추출 안 됨"과 "빈 값으로 추출됨"을 구분한다.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaRecord {
    /// 출처 PDF 파일명
    pub source: String,
    /// 날짜 (가급적 YYYY-MM-DD)
    pub date: Option<String>,
    /// 회의 장소
    pub location: Option<String>,
    /// 참석 이사
    pub directors: Option<String>,
    /// 안건 구분: "보고안건" 또는 "의결안건"
    pub kind: Option<String>,
    /// 안건 번호 (예: "1호")
    pub number: Option<String>,
    /// 안건 제목
    pub title: Option<String>,
    /// 처리 결과 요약
    pub result: Option<String>,
}

impl AgendaRecord {
    /// JSON 객체에서 레코드를 만든다. 객체가 아니면 `None`.
    ///
    /// 필드 누락이나 null 은 허용하고 해당 필드만 비워 둔다.
    pub fn from_value(source: &str, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            source: source.to_string(),
            date: field_string(obj.get("date")),
            location: field_string(obj.get("location")),
            directors: field_string(obj.get("directors")),
            kind: field_string(obj.get("type")),
            number: field_string(obj.get("number")),
            title: field_string(obj.get("title")),
            result: field_string(obj.get("result")),
        })
    }
}

/// JSON 스칼라 값을 문자열로. null/누락/복합 타입은 `None`.
fn field_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn agenda_record_missing_fields_stay_none() {
        let value = json!({ "title": "감사결과 보고", "type": "보고안건" });
        let record = AgendaRecord::from_value("회의록.pdf", &value).unwrap();
        assert_eq!(record.title.as_deref(), Some("감사결과 보고"));
        assert_eq!(record.kind.as_deref(), Some("보고안건"));
        assert_eq!(record.date, None);
        assert_eq!(record.result, None);
    }

    #[test]
    fn agenda_record_null_is_absent() {
        let value = json!({ "date": null, "number": "1호" });
        let record = AgendaRecord::from_value("a.pdf", &value).unwrap();
        assert_eq!(record.date, None);
        assert_eq!(record.number.as_deref(), Some("1호"));
    }

    #[test]
    fn agenda_record_rejects_non_object() {
        assert!(AgendaRecord::from_value("a.pdf", &json!("문자열")).is_none());
        assert!(AgendaRecord::from_value("a.pdf", &json!(3)).is_none());
    }

    #[test]
    fn agenda_record_number_value_becomes_string() {
        let value = json!({ "number": 3 });
        let record = AgendaRecord::from_value("a.pdf", &value).unwrap();
        assert_eq!(record.number.as_deref(), Some("3"));
    }
}
