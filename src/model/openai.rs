//! OpenAI-compatible streaming client built on `async-openai`.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs};
use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use super::{CompletionClient, CompletionRequest, DeltaStream, ModelConfig};
use crate::error::{Error, ModelError, Result};

/// Chat-completion client for OpenAI-compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client for the configured endpoint.
    #[must_use]
    pub fn new(config: &ModelConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.base_url.clone());

        Self {
            client: Client::with_config(openai_config),
            base_url: config.base_url.clone(),
        }
    }
}

#[allow(deprecated)] // `max_tokens` is what OpenAI-compatible hosts still accept
fn build_request(
    request: CompletionRequest,
) -> std::result::Result<async_openai::types::CreateChatCompletionRequest, ModelError> {
    let message = ChatCompletionRequestUserMessageArgs::default()
        .content(request.prompt)
        .build()?;

    Ok(CreateChatCompletionRequestArgs::default()
        .model(request.model)
        .messages(vec![message.into()])
        .temperature(request.temperature)
        .max_tokens(request.max_tokens)
        .top_p(request.top_p)
        .stream(true)
        .build()?)
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn stream(&self, request: CompletionRequest) -> Result<DeltaStream> {
        debug!(
            endpoint = %self.base_url,
            model = %request.model,
            temperature = request.temperature,
            prompt_chars = request.prompt.len(),
            "opening completion stream"
        );

        let request = build_request(request)?;
        let responses = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(ModelError::from)?;

        let deltas = responses.filter_map(|item| async move {
            match item {
                Ok(response) => {
                    let text: String = response
                        .choices
                        .into_iter()
                        .filter_map(|choice| choice.delta.content)
                        .collect();
                    (!text.is_empty()).then_some(Ok(text))
                }
                Err(err) => Some(Err(Error::from(err))),
            }
        });

        Ok(Box::pin(deltas))
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ModelConfig {
        ModelConfig::new(Some("test-key".to_string())).unwrap()
    }

    #[test]
    fn test_build_request() {
        let request = CompletionRequest::new(config().model, "Translate this", 0.4);
        let built = build_request(request).unwrap();
        assert_eq!(built.model, "gemma2-9b-it");
        assert_eq!(built.stream, Some(true));
        assert_eq!(built.temperature, Some(0.4));
        assert_eq!(built.top_p, Some(1.0));
        assert_eq!(built.messages.len(), 1);
    }

    #[test]
    #[allow(deprecated)]
    fn test_build_request_token_cap() {
        let request = CompletionRequest::new(config().model, "x", 0.3);
        let built = build_request(request).unwrap();
        assert_eq!(built.max_tokens, Some(2048));
    }

    #[test]
    fn test_client_name_is_endpoint() {
        let client = OpenAiClient::new(&config().base_url("http://localhost:1234/v1"));
        assert_eq!(client.name(), "http://localhost:1234/v1");
    }
}
