//! Smoke check against the configured endpoint: one system + user completion.

use anyhow::Context;
use openai_client::{system_and_user, OpenAIClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
    let model = std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

    let client = match std::env::var("OPENAI_BASE_URL") {
        Ok(base_url) => OpenAIClient::with_base_url(api_key, base_url),
        Err(_) => OpenAIClient::new(api_key),
    };

    let messages = system_and_user(
        "You are an assistant focused solely on health and nutrition.",
        "Give me one tip for drinking more water.",
    )?;
    let response = client.chat_completion(&model, messages, Some(120)).await?;
    println!("Response: {}", response);

    Ok(())
}
