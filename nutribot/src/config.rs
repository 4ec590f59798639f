//! Bot configuration loaded from the process environment.
//!
//! Credentials are required and fail fast; everything else has a default.

use std::env;
use std::path::PathBuf;

use crate::core::{BotError, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_AI_MAX_TOKENS: u32 = 300;
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-2";
pub const DEFAULT_LOGO_PATH: &str = "LogoChatBot.png";
pub const DEFAULT_LOG_FILE: &str = "logs/nutribot.log";

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    pub ai_max_tokens: u32,
    pub image_model: String,
    /// Image sent on /start; None when `LOGO_PATH` is set to an empty value.
    pub logo_path: Option<PathBuf>,
    pub log_file: String,
    /// Optional Telegram Bot API base URL (e.g. a local Bot API server or test mock).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

/// First non-empty value among `keys`.
fn first_set(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn required(keys: &[&str], what: &str) -> Result<String> {
    first_set(keys).ok_or_else(|| {
        BotError::Config(format!(
            "{} not found. Set {} in the environment or .env file.",
            what,
            keys.join(" or ")
        ))
    })
}

impl BotConfig {
    /// Loads configuration from environment variables.
    /// `token` overrides `TELEGRAM_TOKEN` / `BOT_TOKEN` when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => token,
            None => required(&["TELEGRAM_TOKEN", "BOT_TOKEN"], "Telegram bot token")?,
        };
        let openai_api_key = required(&["OPENAI_API_KEY"], "OpenAI API key")?;

        let openai_base_url = first_set(&["OPENAI_BASE_URL"])
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        let ai_model = first_set(&["AI_MODEL"]).unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());
        let ai_max_tokens = match first_set(&["AI_MAX_TOKENS"]) {
            Some(raw) => raw.parse().map_err(|_| {
                BotError::Config(format!("AI_MAX_TOKENS must be a positive integer, got {:?}", raw))
            })?,
            None => DEFAULT_AI_MAX_TOKENS,
        };
        let image_model =
            first_set(&["IMAGE_MODEL"]).unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());
        let logo_path = match env::var("LOGO_PATH") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from(DEFAULT_LOGO_PATH)),
        };
        let log_file = first_set(&["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = first_set(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]);

        let config = Self {
            bot_token,
            openai_api_key,
            openai_base_url,
            ai_model,
            ai_max_tokens,
            image_model,
            logo_path,
            log_file,
            telegram_api_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would only fail later (bad URLs, zero output bound).
    pub fn validate(&self) -> Result<()> {
        if self.ai_max_tokens == 0 {
            return Err(BotError::Config("AI_MAX_TOKENS must be greater than 0".to_string()));
        }
        reqwest::Url::parse(&self.openai_base_url).map_err(|e| {
            BotError::Config(format!("Invalid OPENAI_BASE_URL {}: {}", self.openai_base_url, e))
        })?;
        if let Some(ref url) = self.telegram_api_url {
            reqwest::Url::parse(url)
                .map_err(|e| BotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url, e)))?;
        }
        Ok(())
    }
}
