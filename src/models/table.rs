//! 메모리 상의 표
//!
//! 컬럼명은 도메인(한국어 헤더)을 그대로 쓰는 불투명 문자열 키다.
//! 의미 해석은 하지 않고, 설정으로 받은 컬럼명으로만 라우팅한다.

use std::collections::HashMap;

/// 순서 있는 컬럼과 행 목록
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// 컬럼 순서 (출력 순서를 결정)
    pub columns: Vec<String>,
    /// 행 목록 (컬럼명 → 값)
    pub rows: Vec<HashMap<String, String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: HashMap<String, String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 컬럼이 없으면 맨 뒤에 추가한다
    pub fn ensure_column(&mut self, name: &str) {
        if !self.columns.iter().any(|c| c == name) {
            self.columns.push(name.to_string());
        }
    }

    /// 셀 조회. 행이나 컬럼이 없으면 빈 문자열.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 셀 기록. 컬럼이 없으면 추가한다.
    pub fn set_cell(&mut self, row: usize, column: &str, value: impl Into<String>) {
        self.ensure_column(column);
        if let Some(r) = self.rows.get_mut(row) {
            r.insert(column.to_string(), value.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_adds_missing_column() {
        let mut table = Table::new(vec!["제목".to_string()]);
        table.push_row(HashMap::from([("제목".to_string(), "기사 1".to_string())]));

        table.set_cell(0, "요약", "요약문");
        assert_eq!(table.columns, vec!["제목", "요약"]);
        assert_eq!(table.cell(0, "요약"), "요약문");
    }

    #[test]
    fn cell_missing_is_empty() {
        let table = Table::new(vec!["제목".to_string()]);
        assert_eq!(table.cell(0, "제목"), "");
    }
}
