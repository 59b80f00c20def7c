//! 실행 설정
//!
//! 환경변수에서 읽어 들인다. 인증 정보는 선택 필드로 들고 있다가 각 작업이
//! 시작 시점에 `require_*` 로 검증한다. 없으면 어떤 항목도 처리하기 전에
//! `ConfigError` 로 중단한다.

use crate::error::ConfigError;

/// 프로그램 설정
#[derive(Clone, Debug)]
pub struct Config {
    /// OpenAI API 키 (환경변수 OPENAI_API_KEY_KIT)
    pub openai_api_key: Option<String>,
    /// 네이버 오픈 API 클라이언트 ID
    pub naver_client_id: Option<String>,
    /// 네이버 오픈 API 클라이언트 시크릿
    pub naver_client_secret: Option<String>,
    /// Elsevier Abstract Retrieval API 키
    pub elsevier_api_key: Option<String>,
    /// Elsevier 기관 토큰 (있으면 요청 헤더에 추가)
    pub elsevier_inst_token: Option<String>,
    /// LLM 모델 이름
    pub llm_model_name: String,
    /// 항목 간 대기 시간 (ms, API rate limit 대비)
    pub request_delay_ms: u64,
    /// 뉴스 본문 수집 최대 건수
    pub max_articles: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            naver_client_id: None,
            naver_client_secret: None,
            elsevier_api_key: None,
            elsevier_inst_token: None,
            llm_model_name: "gpt-4o".to_string(),
            request_delay_ms: 500,
            max_articles: 10,
        }
    }
}

impl Config {
    /// 환경변수에서 설정을 읽는다
    ///
    /// 인증 정보가 없어도 여기서는 실패하지 않는다. 실제 검증은 작업별
    /// `require_*` 가 담당한다.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY_KIT").ok(),
            naver_client_id: std::env::var("NAVER_API_CLIENT_ID").ok(),
            naver_client_secret: std::env::var("NAVER_API_CLIENT_SECRET").ok(),
            elsevier_api_key: std::env::var("ELSEVIER_API_KEY").ok(),
            elsevier_inst_token: std::env::var("ELSEVIER_INST_TOKEN").ok(),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            request_delay_ms: std::env::var("REQUEST_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_delay_ms),
            max_articles: std::env::var("MAX_ARTICLES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_articles),
        }
    }

    /// OpenAI API 키 확인
    pub fn require_openai(&self) -> Result<&str, ConfigError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: "OPENAI_API_KEY_KIT".to_string(),
            })
    }

    /// 네이버 오픈 API 인증 정보 확인
    pub fn require_naver(&self) -> Result<(&str, &str), ConfigError> {
        let id = self
            .naver_client_id
            .as_deref()
            .ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: "NAVER_API_CLIENT_ID".to_string(),
            })?;
        let secret =
            self.naver_client_secret
                .as_deref()
                .ok_or_else(|| ConfigError::EnvVarNotFound {
                    var_name: "NAVER_API_CLIENT_SECRET".to_string(),
                })?;
        Ok((id, secret))
    }

    /// Elsevier API 키 확인
    pub fn require_elsevier(&self) -> Result<&str, ConfigError> {
        self.elsevier_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: "ELSEVIER_API_KEY".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_openai_missing_key() {
        let config = Config::default();
        let err = config.require_openai().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY_KIT"));
    }

    #[test]
    fn require_naver_needs_both() {
        let config = Config {
            naver_client_id: Some("id".to_string()),
            ..Config::default()
        };
        let err = config.require_naver().unwrap_err();
        assert!(err.to_string().contains("NAVER_API_CLIENT_SECRET"));

        let config = Config {
            naver_client_id: Some("id".to_string()),
            naver_client_secret: Some("secret".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_naver().unwrap(), ("id", "secret"));
    }
}
