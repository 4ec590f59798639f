//! Component factory: builds the bot's services from config and assembles the handler chain.

use anyhow::Result;
use image_generation_client::ImageGenerationClient;
use openai_client::OpenAIClient;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::assistant::{Assistant, OpenAICompletion};
use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{ChatHandler, CommandHandler, Conversation, LoggingHandler, TopicChoiceHandler};
use crate::session::{InMemorySessionStore, SessionStore};
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for the running bot.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub sessions: Arc<dyn SessionStore>,
    pub assistant: Assistant,
}

/// Creates the teloxide Bot, pointed at `telegram_api_url` when configured.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url) => Ok(bot.set_api_url(reqwest::Url::parse(url)?)),
        None => Ok(bot),
    }
}

/// Builds the remote API clients and the [`Assistant`] over them.
pub fn build_assistant(config: &BotConfig) -> Assistant {
    let completion = OpenAICompletion::new(
        OpenAIClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        ),
        config.ai_model.clone(),
        config.ai_max_tokens,
    );
    let images = ImageGenerationClient::with_base_url(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )
    .with_model(&config.image_model);
    Assistant::new(Arc::new(completion), Arc::new(images))
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let assistant = build_assistant(config);

    info!(
        model = %config.ai_model,
        max_tokens = config.ai_max_tokens,
        image_model = %config.image_model,
        "Bot components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        sessions,
        assistant,
    })
}

/// Dispatcher order: logging → commands → topic callbacks → free text.
pub fn build_handler_chain(conversation: Conversation) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(conversation.clone())))
        .add_handler(Arc::new(TopicChoiceHandler::new(conversation.clone())))
        .add_handler(Arc::new(ChatHandler::new(conversation)))
}
