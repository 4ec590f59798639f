//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion.
//! Provides token masking for safe logging and maps every failure to a classified [`ClientError`].

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use backoff::ExponentialBackoffBuilder;
use std::sync::Arc;
use std::time::Duration;
use tracing;

mod error;

pub use error::ClientError;

pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Builds the `[system, user]` message pair used for single-turn completions.
pub fn system_and_user(
    system: &str,
    user: &str,
) -> Result<Vec<ChatCompletionRequestMessage>, ClientError> {
    Ok(vec![
        ChatCompletionRequestSystemMessageArgs::default()
            .content(system.to_string())
            .build()?
            .into(),
        ChatCompletionRequestUserMessageArgs::default()
            .content(user.to_string())
            .build()?
            .into(),
    ])
}

/// Builds an async-openai client that gives up on the first failure.
///
/// async-openai's default backoff retries HTTP 429 for up to 15 minutes; with a zero elapsed-time
/// budget every error reaches the caller at once.
pub fn build_client(api_key: String, base_url: Option<String>) -> Client<OpenAIConfig> {
    let mut config = OpenAIConfig::new().with_api_key(api_key);
    if let Some(base_url) = base_url {
        config = config.with_api_base(base_url);
    }
    let no_retry = ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build();
    Client::with_config(config).with_backoff(no_retry)
}

/// OpenAI chat client. Wraps async-openai client; holds the API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    /// API key stored only for logging (masked).
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(build_client(api_key.clone(), None)),
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Arc::new(build_client(api_key.clone(), Some(base_url))),
            api_key_for_logging: api_key,
        }
    }

    /// Masked API key for log fields.
    pub fn masked_key(&self) -> String {
        mask_token(&self.api_key_for_logging)
    }

    /// Sends one chat completion request and returns the first choice's text, trimmed.
    ///
    /// `max_tokens` bounds the output length. A response with no choices or only whitespace
    /// is reported as [`ClientError::MalformedResponse`]. No retry is attempted here.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        max_tokens: Option<u32>,
    ) -> Result<String, ClientError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = ?max_tokens,
            api_key = %self.masked_key(),
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(max_tokens) = max_tokens {
            #[allow(deprecated)]
            args.max_tokens(max_tokens);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        let choice = response
            .choices
            .first()
            .ok_or_else(|| ClientError::MalformedResponse("no choices in response".to_string()))?;
        let content = choice.message.content.as_deref().unwrap_or_default().trim();
        if content.is_empty() {
            return Err(ClientError::MalformedResponse(
                "empty completion content".to_string(),
            ));
        }
        Ok(content.to_string())
    }
}
