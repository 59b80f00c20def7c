//! 오류 타입 정의
//!
//! 오류는 성격별 하위 enum 으로 나누고, `AppError` 가 최상위에서 묶는다.
//! 항목 단위 실패(전송 실패, 응답 형식 불량)는 배치를 중단시키지 않고
//! 건너뜀 처리되며, 설정 오류만 실행 전체를 중단시킨다.

use thiserror::Error;

/// 애플리케이션 오류 타입
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 오류 (실행 중단)
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 외부 API 호출 오류
    #[error("API 오류: {0}")]
    Api(#[from] ApiError),
    /// LLM 호출 오류
    #[error("LLM 오류: {0}")]
    Llm(#[from] LlmError),
    /// LLM 응답 해석 오류
    #[error("응답 해석 오류: {0}")]
    Parse(#[from] ParseError),
    /// 파일 입출력 오류
    #[error("파일 오류: {0}")]
    File(#[from] FileError),
}

/// 설정 오류
///
/// 필요한 인증 정보가 없으면 처리를 시작하기 전에 이 오류로 중단한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("환경변수 {var_name}가 설정되지 않았습니다. OS 환경변수 설정 후 다시 실행하세요.")]
    EnvVarNotFound { var_name: String },
    #[error("환경변수 {var_name} 해석 실패: 값 '{value}'")]
    EnvVarParseFailed { var_name: String, value: String },
}

/// 외부 API 호출 오류
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API 요청 실패 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API 응답 코드 오류 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    #[error("API 응답 JSON 해석 실패 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// LLM 호출 오류
///
/// 호출 실패는 빈 문자열 같은 정상 응답으로 가장하지 않고 반드시 이
/// 타입으로 드러낸다. 건너뜀 여부는 오케스트레이터가 결정한다.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API 호출 실패 (모델: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    #[error("LLM 응답이 비어 있습니다 (모델: {model})")]
    EmptyResponse { model: String },
}

/// LLM 응답 해석 오류
///
/// 구조화 목록 작업에서만 발생한다. 분류 작업은 일치하지 않는 응답을
/// 기타 라벨로 흡수하므로 해석 오류가 생기지 않는다.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("LLM 응답을 JSON 배열로 해석할 수 없습니다. 응답 일부: {preview}")]
    NotJsonArray { preview: String },
    #[error("LLM 응답 JSON의 최상위 구조가 배열이 아닙니다")]
    TopLevelNotArray,
}

/// 파일 입출력 오류
#[derive(Debug, Error)]
pub enum FileError {
    #[error("파일 읽기 실패 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("파일 쓰기 실패 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF 텍스트 추출 실패 ({path}): {message}")]
    PdfExtractFailed { path: String, message: String },
    #[error("엑셀 파일 읽기 실패 ({path}): {message}")]
    SheetReadFailed { path: String, message: String },
    #[error("CSV 처리 실패 ({path}): {source}")]
    CsvFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("워크시트가 없습니다 ({path})")]
    EmptyWorkbook { path: String },
}

/// 애플리케이션 결과 타입
pub type Result<T> = std::result::Result<T, AppError>;
