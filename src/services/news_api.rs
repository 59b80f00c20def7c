//! 네이버 뉴스 검색 API 클라이언트
//!
//! 검색은 고정 페이지 크기(100건)·정확도순 정렬로 한 번만 호출한다.
//! 기사 원문 요청은 건별로 실패할 수 있고, 실패는 "내용 없음"으로
//! 취급한다 — 기사 하나 때문에 전체 수집이 멈추면 안 된다.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::error::{ApiError, ConfigError};

const SEARCH_ENDPOINT: &str = "https://openapi.naver.com/v1/search/news.json";
const PAGE_SIZE: u32 = 100;
const ARTICLE_TIMEOUT_SECS: u64 = 10;

// UA 없으면 일부 언론사에서 차단하는 경우가 있다
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

/// 검색 결과 한 건
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<NewsItem>,
}

/// 네이버 오픈 API 클라이언트
pub struct NaverNewsClient {
    http: Client,
    client_id: String,
    client_secret: String,
}

impl NaverNewsClient {
    /// 새 클라이언트 생성. 인증 정보가 없으면 즉시 실패.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let (client_id, client_secret) = config.require_naver()?;
        Ok(Self {
            http: Client::new(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }

    /// 뉴스 검색
    pub async fn search(&self, query: &str) -> Result<Vec<NewsItem>, ApiError> {
        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[
                ("query", query.to_string()),
                ("display", PAGE_SIZE.to_string()),
                ("start", "1".to_string()),
                ("sort", "sim".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed {
                endpoint: SEARCH_ENDPOINT.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::BadStatus {
                endpoint: SEARCH_ENDPOINT.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse =
            response.json().await.map_err(|e| ApiError::JsonParseFailed {
                endpoint: SEARCH_ENDPOINT.to_string(),
                source: e,
            })?;

        Ok(body.items)
    }

    /// 기사 원문 HTML 요청
    ///
    /// 비정상 응답(전송 오류, 200 아님)은 `None` — 해당 기사만 건너뛴다.
    pub async fn fetch_article_html(&self, url: &str) -> Option<String> {
        let response = match self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(ARTICLE_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("기사 요청 실패: {} / {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("기사 응답 코드: {} / {}", url, response.status().as_u16());
            return None;
        }

        match response.text().await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("기사 본문 수신 실패: {} / {}", url, e);
                None
            }
        }
    }
}
