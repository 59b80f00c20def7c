//! 회의 안건 PDF 구조화 플로우
//!
//! 파일 하나에서 안건이 여러 건 나온다. 파일 단위로 실패를 격리하고,
//! 성공한 파일의 안건들만 누적한다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::FileError;
use crate::models::{AgendaRecord, SkipReason, SourceItem, Table};
use crate::parse::parse_agenda_array;
use crate::prompt;
use crate::services::{extract_pdf_text, ChatModel};

/// 폴더에서 PDF 파일명을 모은다 (처리 순서 고정을 위해 이름순 정렬)
pub fn list_pdf_files(folder: &Path) -> Result<Vec<String>, FileError> {
    let read_err = |e: std::io::Error| FileError::ReadFailed {
        path: folder.display().to_string(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_ascii_lowercase().ends_with(".pdf") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// PDF 한 건 구조화: 텍스트 추출 → 프롬프트 → LLM → JSON 배열 해석
///
/// 읽을 수 없거나 텍스트가 비어 있는 파일은 원문 없음으로 건너뛴다.
/// 복구 시도 후에도 배열로 해석되지 않으면 그 파일만 건너뛰고 배치는
/// 계속된다.
pub async fn structure_agenda_item(
    llm: &dyn ChatModel,
    folder: &Path,
    item: &SourceItem,
) -> Result<Vec<AgendaRecord>, SkipReason> {
    let path = folder.join(&item.id);

    let text = match extract_pdf_text(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("{}", e);
            String::new()
        }
    };
    if text.trim().is_empty() {
        return Err(SkipReason::EmptySource);
    }

    let spec = prompt::agenda(&text, &item.id);
    let raw = llm
        .complete(&spec.system, &spec.user)
        .await
        .map_err(|e| SkipReason::Transport(e.to_string()))?;

    parse_agenda_array(&raw, &item.id).map_err(|e| SkipReason::ParseFailure(e.to_string()))
}

/// 누적된 안건 레코드를 출력 표로 변환
///
/// 추출되지 않은 필드(None)는 빈 셀이 된다.
pub fn agenda_table(records: &[AgendaRecord]) -> Table {
    let columns = [
        "source",
        "date",
        "location",
        "directors",
        "type",
        "number",
        "title",
        "result",
    ];
    let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());

    for record in records {
        let cell = |value: &Option<String>| value.clone().unwrap_or_default();
        table.push_row(HashMap::from([
            ("source".to_string(), record.source.clone()),
            ("date".to_string(), cell(&record.date)),
            ("location".to_string(), cell(&record.location)),
            ("directors".to_string(), cell(&record.directors)),
            ("type".to_string(), cell(&record.kind)),
            ("number".to_string(), cell(&record.number)),
            ("title".to_string(), cell(&record.title)),
            ("result".to_string(), cell(&record.result)),
        ]));
    }

    table
}
