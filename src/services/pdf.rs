//! PDF 텍스트 추출
//!
//! 페이지 텍스트를 이어 붙인 전체 본문을 돌려준다. 비어 있는 결과의
//! 건너뜀 판단은 호출 쪽(워크플로) 몫이다.

use std::path::Path;

use crate::error::FileError;

/// PDF 전체 텍스트 추출
pub fn extract_pdf_text(path: &Path) -> Result<String, FileError> {
    pdf_extract::extract_text(path).map_err(|e| FileError::PdfExtractFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
