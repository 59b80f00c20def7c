//! 연도별 × 연구주제별 건수 집계
//!
//! 태그까지 붙은 논문 표에서 피벗 표를 만든다. LLM 을 쓰지 않는 순수
//! 집계이며, 행/열 합계를 함께 붙인다.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::Table;

const TOTAL_LABEL: &str = "합계";
const UNTAGGED_LABEL: &str = "미분류";

/// 연도 × 주제 건수 피벗 표
///
/// 태그가 비어 있는 행은 미분류로 집계한다. 연도·주제 모두 문자열
/// 정렬 순서를 따른다 (4자리 연도는 그대로 시간순이 된다).
pub fn year_topic_pivot(table: &Table, year_col: &str, tag_col: &str) -> Table {
    let mut counts: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut tags: BTreeSet<String> = BTreeSet::new();

    for row in &table.rows {
        let year = row.get(year_col).map(String::as_str).unwrap_or("").trim().to_string();
        let tag = match row.get(tag_col).map(String::as_str).unwrap_or("").trim() {
            "" => UNTAGGED_LABEL.to_string(),
            tag => tag.to_string(),
        };
        tags.insert(tag.clone());
        *counts.entry(year).or_default().entry(tag).or_default() += 1;
    }

    let mut columns = vec![year_col.to_string()];
    columns.extend(tags.iter().cloned());
    columns.push(TOTAL_LABEL.to_string());

    let mut pivot = Table::new(columns);
    let mut column_totals: HashMap<String, usize> = HashMap::new();
    let mut grand_total = 0usize;

    for (year, tag_counts) in &counts {
        let mut row = HashMap::from([(year_col.to_string(), year.clone())]);
        let mut row_total = 0usize;
        for tag in &tags {
            let count = tag_counts.get(tag).copied().unwrap_or(0);
            row.insert(tag.clone(), count.to_string());
            row_total += count;
            *column_totals.entry(tag.clone()).or_default() += count;
        }
        row.insert(TOTAL_LABEL.to_string(), row_total.to_string());
        grand_total += row_total;
        pivot.push_row(row);
    }

    // 합계 행
    let mut total_row = HashMap::from([(year_col.to_string(), TOTAL_LABEL.to_string())]);
    for tag in &tags {
        let count = column_totals.get(tag).copied().unwrap_or(0);
        total_row.insert(tag.clone(), count.to_string());
    }
    total_row.insert(TOTAL_LABEL.to_string(), grand_total.to_string());
    pivot.push_row(total_row);

    pivot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: &str, tag: &str) -> HashMap<String, String> {
        HashMap::from([
            ("기준년도".to_string(), year.to_string()),
            ("연구주제태그".to_string(), tag.to_string()),
        ])
    }

    #[test]
    fn pivot_counts_with_margins() {
        let mut table = Table::new(vec!["기준년도".to_string(), "연구주제태그".to_string()]);
        table.push_row(row("2023", "1. 동물대체시험기술 개발"));
        table.push_row(row("2023", "6. 기타"));
        table.push_row(row("2024", "1. 동물대체시험기술 개발"));
        table.push_row(row("2024", ""));

        let pivot = year_topic_pivot(&table, "기준년도", "연구주제태그");

        // 연도 2행 + 합계 1행
        assert_eq!(pivot.len(), 3);
        assert_eq!(pivot.cell(0, "기준년도"), "2023");
        assert_eq!(pivot.cell(0, "1. 동물대체시험기술 개발"), "1");
        assert_eq!(pivot.cell(0, "합계"), "2");
        assert_eq!(pivot.cell(1, "미분류"), "1");
        assert_eq!(pivot.cell(2, "기준년도"), "합계");
        assert_eq!(pivot.cell(2, "합계"), "4");
    }
}
