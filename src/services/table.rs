//! 표 형식 파일 입출력
//!
//! 읽기는 확장자로 가른다: xlsx/xls 는 calamine, 나머지는 CSV. 첫 행을
//! 헤더로 삼는다. 쓰기는 CSV 한 가지다. 컬럼명은 해석하지 않는다.

use calamine::{open_workbook_auto, Reader};
use std::collections::HashMap;
use std::path::Path;

use crate::error::FileError;
use crate::models::Table;

/// 표 파일 읽기
pub fn read_table(path: &Path) -> Result<Table, FileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") | Some("xls") => read_excel(path),
        _ => read_csv(path),
    }
}

/// 표를 CSV 로 기록 (마지막에 한 번만 호출된다)
pub fn write_table(path: &Path, table: &Table) -> Result<(), FileError> {
    let csv_err = |e: csv::Error| FileError::CsvFailed {
        path: path.display().to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(&table.columns).map_err(csv_err)?;

    for row in &table.rows {
        let record: Vec<&str> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record).map_err(csv_err)?;
    }

    writer.flush().map_err(|e| FileError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })
}

fn read_excel(path: &Path) -> Result<Table, FileError> {
    let sheet_err = |message: String| FileError::SheetReadFailed {
        path: path.display().to_string(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| sheet_err(e.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| FileError::EmptyWorkbook {
            path: path.display().to_string(),
        })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| sheet_err(e.to_string()))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(|cell| cell.to_string().trim().to_string()).collect())
        .unwrap_or_default();

    let mut table = Table::new(columns);
    for row in rows {
        let mut record = HashMap::new();
        for (index, column) in table.columns.iter().enumerate() {
            let value = row.get(index).map(|cell| cell.to_string()).unwrap_or_default();
            record.insert(column.clone(), value);
        }
        table.rows.push(record);
    }
    Ok(table)
}

fn read_csv(path: &Path) -> Result<Table, FileError> {
    let csv_err = |e: csv::Error| FileError::CsvFailed {
        path: path.display().to_string(),
        source: e,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let mut row = HashMap::new();
        for (index, column) in table.columns.iter().enumerate() {
            let value = record.get(index).unwrap_or("").to_string();
            row.insert(column.clone(), value);
        }
        table.rows.push(row);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_write_then_read_preserves_columns_and_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        let mut table = Table::new(vec!["논문명".to_string(), "초록".to_string()]);
        table.push_row(HashMap::from([
            ("논문명".to_string(), "독성 평가 연구".to_string()),
            ("초록".to_string(), "쉼표, 포함 초록".to_string()),
        ]));
        table.push_row(HashMap::from([
            ("논문명".to_string(), "두 번째 논문".to_string()),
            // 초록 누락 → 빈 셀
        ]));

        write_table(&path, &table).unwrap();
        let loaded = read_table(&path).unwrap();

        assert_eq!(loaded.columns, vec!["논문명", "초록"]);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.cell(0, "초록"), "쉼표, 포함 초록");
        assert_eq!(loaded.cell(1, "초록"), "");
    }
}
