//! Completion and image clients behind traits, plus the [`Assistant`] that turns their failures
//! into degraded replies (fixed apology text, no image).

use async_trait::async_trait;
use image_generation_client::ImageGenerationClient;
use openai_client::{system_and_user, ClientError, OpenAIClient};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::session::Topic;

/// Reply sent when the completion API cannot produce an answer.
pub const APOLOGY: &str = "Sorry, I can't process your request right now.";

/// How much of a reply is handed to the image API as its prompt.
pub const IMAGE_PROMPT_CHARS: usize = 1000;

/// Single-turn chat completion: one system instruction plus one user prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ClientError>;
}

/// One-image generation returning the image URL.
#[async_trait]
pub trait ImageClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}

/// [`CompletionClient`] over the OpenAI chat completion API with a fixed model and output bound.
#[derive(Clone)]
pub struct OpenAICompletion {
    client: OpenAIClient,
    model: String,
    max_tokens: u32,
}

impl OpenAICompletion {
    pub fn new(client: OpenAIClient, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAICompletion {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ClientError> {
        let messages = system_and_user(system, prompt)?;
        self.client
            .chat_completion(&self.model, messages, Some(self.max_tokens))
            .await
    }
}

#[async_trait]
impl ImageClient for ImageGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        self.generate_image(prompt).await
    }
}

/// Front door to the remote APIs used by handlers. Never fails: errors become degraded output.
#[derive(Clone)]
pub struct Assistant {
    completion: Arc<dyn CompletionClient>,
    images: Arc<dyn ImageClient>,
}

impl Assistant {
    pub fn new(completion: Arc<dyn CompletionClient>, images: Arc<dyn ImageClient>) -> Self {
        Self { completion, images }
    }

    /// Answers `prompt` under `topic`'s system instruction; [`APOLOGY`] on any failure.
    pub async fn answer(&self, prompt: &str, topic: Topic) -> String {
        self.try_answer(prompt, topic)
            .await
            .unwrap_or_else(|_| APOLOGY.to_string())
    }

    /// Like [`Assistant::answer`] but hands back the classified failure (already logged) so the
    /// caller can skip follow-up work such as illustration.
    #[instrument(skip(self, prompt))]
    pub async fn try_answer(&self, prompt: &str, topic: Topic) -> Result<String, ClientError> {
        match self
            .completion
            .complete(topic.system_instruction(), prompt)
            .await
        {
            Ok(text) => {
                info!(reply_len = text.len(), "Completion received");
                Ok(text)
            }
            Err(e) => {
                if e.is_transient() {
                    warn!(error = %e, "Completion failed");
                } else {
                    error!(error = %e, "Completion failed (needs attention)");
                }
                Err(e)
            }
        }
    }

    /// Generates an illustration for the first [`IMAGE_PROMPT_CHARS`] characters of `text`.
    /// None means no image should be sent.
    #[instrument(skip(self, text))]
    pub async fn illustrate(&self, text: &str) -> Option<String> {
        let prompt: String = text.chars().take(IMAGE_PROMPT_CHARS).collect();
        match self.images.generate(&prompt).await {
            Ok(url) => Some(url),
            Err(e) => {
                error!(error = %e, transient = e.is_transient(), "Image generation failed, skipping image");
                None
            }
        }
    }
}
