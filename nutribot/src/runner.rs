//! Main entry: init logging, build components and handler chain, then run the dispatcher.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::handlers::Conversation;
use crate::telegram::run_dispatcher;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        openai_base_url = %config.openai_base_url,
        openai_api_key = %openai_client::mask_token(&config.openai_api_key),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let conversation = Conversation::new(
        components.bot.clone(),
        components.sessions.clone(),
        components.assistant.clone(),
        config.logo_path.clone(),
    );
    let handler_chain = build_handler_chain(conversation);

    info!("Bot started successfully");
    run_dispatcher(components.teloxide_bot, handler_chain).await;

    Ok(())
}
