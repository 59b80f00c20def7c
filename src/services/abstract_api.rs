//! Elsevier Abstract Retrieval API 클라이언트
//!
//! DOI 로 초록을 조회한다. 응답 JSON 에서 초록이 놓이는 위치가 문서마다
//! 달라 bibrecord 경로를 먼저 뒤지고 coredata 로 넘어간다.

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ConfigError};

const ABSTRACT_BASE_URL: &str = "https://api.elsevier.com/content/abstract";

/// Elsevier API 클라이언트
pub struct ElsevierClient {
    http: Client,
    api_key: String,
    /// 기관 토큰 (있으면 헤더에 추가)
    inst_token: Option<String>,
}

impl ElsevierClient {
    /// 새 클라이언트 생성. API 키가 없으면 즉시 실패.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config.require_elsevier()?;
        Ok(Self {
            http: Client::new(),
            api_key: api_key.to_string(),
            inst_token: config.elsevier_inst_token.clone(),
        })
    }

    /// DOI 로 초록 조회
    ///
    /// 200 이 아니면 오류, 200 인데 초록이 없으면 `Ok(None)`. 두 경우 모두
    /// 해당 행만 결측 처리되고 배치는 계속된다.
    pub async fn abstract_by_doi(&self, doi: &str) -> Result<Option<String>, ApiError> {
        let url = format!("{}/doi/{}", ABSTRACT_BASE_URL, doi);

        let mut request = self
            .http
            .get(&url)
            .header("X-ELS-APIKey", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.inst_token {
            request = request.header("X-ELS-Insttoken", token);
        }

        let response = request.send().await.map_err(|e| ApiError::RequestFailed {
            endpoint: url.clone(),
            source: e,
        })?;

        if !response.status().is_success() {
            return Err(ApiError::BadStatus {
                endpoint: url,
                status: response.status().as_u16(),
            });
        }

        let data: Value = response.json().await.map_err(|e| ApiError::JsonParseFailed {
            endpoint: url,
            source: e,
        })?;

        Ok(extract_abstract(&data))
    }
}

/// 응답 JSON 에서 초록 텍스트를 찾는다
fn extract_abstract(data: &Value) -> Option<String> {
    let resp = data.get("abstracts-retrieval-response")?;

    if let Some(text) = abstract_from_bibrecord(resp) {
        return Some(text);
    }

    // fallback: coredata 의 dc:description
    resp.get("coredata")?
        .get("dc:description")?
        .as_str()
        .map(str::to_string)
}

/// 가장 일반적인 초록 위치: item.bibrecord.head.abstracts
fn abstract_from_bibrecord(resp: &Value) -> Option<String> {
    let abstracts = resp.get("item")?.get("bibrecord")?.get("head")?.get("abstracts")?;

    // 단일 객체로 오는 경우와 배열로 오는 경우가 둘 다 있다
    let entries: Vec<&Value> = match abstracts {
        Value::Array(list) => list.iter().collect(),
        other => vec![other],
    };

    for entry in entries {
        let Some(text) = entry.get("abstract") else {
            continue;
        };
        match text {
            Value::Object(map) => {
                if let Some(Value::String(s)) = map.get("$") {
                    return Some(s.clone());
                }
            }
            Value::Array(parts) => {
                for part in parts {
                    if let Some(Value::String(s)) = part.get("$") {
                        return Some(s.clone());
                    }
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn abstract_from_object_form() {
        let data = json!({
            "abstracts-retrieval-response": {
                "item": { "bibrecord": { "head": { "abstracts": {
                    "abstract": { "$": "초록 본문" }
                }}}}
            }
        });
        assert_eq!(extract_abstract(&data).as_deref(), Some("초록 본문"));
    }

    #[test]
    fn abstract_from_list_form() {
        let data = json!({
            "abstracts-retrieval-response": {
                "item": { "bibrecord": { "head": { "abstracts": [
                    { "abstract": [ { "$": "첫 초록" }, { "$": "둘째" } ] }
                ]}}}
            }
        });
        assert_eq!(extract_abstract(&data).as_deref(), Some("첫 초록"));
    }

    #[test]
    fn abstract_falls_back_to_coredata() {
        let data = json!({
            "abstracts-retrieval-response": {
                "coredata": { "dc:description": "coredata 초록" }
            }
        });
        assert_eq!(extract_abstract(&data).as_deref(), Some("coredata 초록"));
    }

    #[test]
    fn abstract_missing_is_none() {
        let data = json!({ "abstracts-retrieval-response": { "coredata": {} } });
        assert_eq!(extract_abstract(&data), None);
        assert_eq!(extract_abstract(&json!({})), None);
    }
}
