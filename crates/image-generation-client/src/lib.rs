//! OpenAI DALL-E image generation client.
//!
//! Requests a single fixed-size image for a text prompt and returns its URL. Prompts are
//! truncated to the API's length limit before sending.

use async_openai::{
    config::OpenAIConfig,
    types::{CreateImageRequestArgs, Image, ImageModel, ImageSize},
    Client,
};
use openai_client::{build_client, mask_token, ClientError};
use std::sync::Arc;
use tracing;

/// Longest prompt the image API accepts, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Every image is requested at this size.
pub const IMAGE_SIZE: ImageSize = ImageSize::S512x512;

/// Appended to prompts cut at [`MAX_PROMPT_CHARS`].
pub const TRUNCATION_MARKER: &str = "...";

/// Cuts `prompt` to at most [`MAX_PROMPT_CHARS`] characters, ending in [`TRUNCATION_MARKER`] when cut.
pub fn truncate_prompt(prompt: &str) -> String {
    if prompt.chars().count() <= MAX_PROMPT_CHARS {
        return prompt.to_string();
    }
    let keep = MAX_PROMPT_CHARS - TRUNCATION_MARKER.chars().count();
    let mut truncated: String = prompt.chars().take(keep).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// OpenAI DALL-E image generation client.
#[derive(Clone)]
pub struct ImageGenerationClient {
    client: Arc<Client<OpenAIConfig>>,
    model: ImageModel,
    api_key_for_logging: String,
}

impl ImageGenerationClient {
    /// Creates a client for the default API base (dall-e-2).
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(build_client(api_key.clone(), None)),
            model: ImageModel::DallE2,
            api_key_for_logging: api_key,
        }
    }

    /// Creates a client for a custom base URL (OpenAI-compatible services, test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Arc::new(build_client(api_key.clone(), Some(base_url))),
            model: ImageModel::DallE2,
            api_key_for_logging: api_key,
        }
    }

    /// Selects the model by name: `dall-e-2`, `dall-e-3`, or any other id passed through.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = match model {
            "dall-e-2" => ImageModel::DallE2,
            "dall-e-3" => ImageModel::DallE3,
            other => ImageModel::Other(other.to_string()),
        };
        self
    }

    /// Generates one image for `prompt` (truncated to [`MAX_PROMPT_CHARS`]) and returns its URL.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn generate_image(&self, prompt: &str) -> Result<String, ClientError> {
        let prompt = truncate_prompt(prompt);
        let masked = mask_token(&self.api_key_for_logging);

        tracing::info!(
            model = ?self.model,
            size = ?IMAGE_SIZE,
            prompt_chars = prompt.chars().count(),
            prompt_preview = %prompt.chars().take(100).collect::<String>(),
            api_key = %masked,
            "OpenAI image generation request"
        );

        let request = CreateImageRequestArgs::default()
            .prompt(prompt)
            .model(self.model.clone())
            .size(IMAGE_SIZE)
            .n(1)
            .build()?;

        let response = self.client.images().create(request).await?;

        match response.data.first().map(|image| &**image) {
            Some(Image::Url { url, .. }) => {
                tracing::info!(image_url = %url, "OpenAI image generation completed");
                Ok(url.clone())
            }
            Some(_) => Err(ClientError::MalformedResponse(
                "image returned without url".to_string(),
            )),
            None => Err(ClientError::MalformedResponse(
                "no image in response".to_string(),
            )),
        }
    }
}
