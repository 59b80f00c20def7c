//! LLM 호출 서비스 - 능력층
//!
//! 시스템 지시문과 사용자 프롬프트 한 쌍을 보내고 응답 본문을 돌려주는
//! 것이 전부다. 모델과 temperature 는 생성 시점에 고정되고 호출 단위로는
//! 바꾸지 않는다. 재시도하지 않는다 — 한 번 실패하면 바로 오류를 돌려주고,
//! 호출 간 간격 조절은 오케스트레이터가 담당한다.
//!
//! ## 기술 스택
//! - `async-openai` crate 로 OpenAI 호환 API 호출

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ConfigError, LlmError};

/// 고정 temperature
const LLM_TEMPERATURE: f32 = 0.2;

/// 채팅 완성 전송 계약
///
/// 테스트에서는 고정 응답을 돌려주는 스텁으로 대체한다.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// 시스템 지시문 절 목록과 사용자 프롬프트를 보내고 응답 본문을 받는다
    ///
    /// 전송 실패는 `LlmError` 로 드러난다. 빈 문자열로 가장하지 않는다.
    async fn complete(&self, system: &[String], prompt: &str) -> Result<String, LlmError>;

    /// 로그용 모델 이름
    fn model(&self) -> &str;
}

/// OpenAI 호환 API 를 쓰는 실제 구현
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 새 LLM 서비스 생성
    ///
    /// API 키가 없으면 여기서 즉시 실패한다. 호출 도중이 아니라 어떤
    /// 항목도 처리하기 전에 중단되어야 하기 때문이다.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config.require_openai()?;
        let openai_config = OpenAIConfig::new().with_api_key(api_key);

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
        })
    }
}

#[async_trait]
impl ChatModel for LlmService {
    async fn complete(&self, system: &[String], prompt: &str) -> Result<String, LlmError> {
        debug!("LLM API 호출, 모델: {}", self.model_name);
        debug!("사용자 프롬프트 길이: {} 문자", prompt.chars().count());

        let build_err = |e: async_openai::error::OpenAIError| LlmError::ApiCallFailed {
            model: self.model_name.clone(),
            message: e.to_string(),
        };

        let mut messages = Vec::new();

        // 시스템 지시문: 절 목록을 공백 하나로 이어 하나의 메시지로 보낸다
        if !system.is_empty() {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(system.join(" "))
                .build()
                .map_err(build_err)?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(build_err)?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(LLM_TEMPERATURE)
            .build()
            .map_err(build_err)?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 호출 실패: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                message: e.to_string(),
            }
        })?;

        debug!("LLM API 호출 성공");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyResponse {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;

    fn create_test_service() -> LlmService {
        let config = Config {
            openai_api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        LlmService::new(&config).unwrap()
    }

    #[test]
    fn new_fails_fast_without_key() {
        let config = Config::default();
        assert!(LlmService::new(&config).is_err());
    }

    #[test]
    fn new_uses_configured_model() {
        let service = create_test_service();
        assert_eq!(service.model(), "gpt-4o");
    }

    /// 실제 API 연결 테스트
    ///
    /// 실행 방법:
    /// ```bash
    /// cargo test llm_api_connectivity -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn llm_api_connectivity() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let service = LlmService::new(&config).expect("OPENAI_API_KEY_KIT 필요");

        let spec = prompt::summarize("정부가 연구개발 예산을 대폭 확대하기로 했다.", 50);
        let result = service.complete(&spec.system, &spec.user).await;

        match result {
            Ok(response) => {
                println!("LLM 응답: {}", response);
                assert!(!response.is_empty());
            }
            Err(e) => panic!("LLM API 호출 실패: {}", e),
        }
    }
}
