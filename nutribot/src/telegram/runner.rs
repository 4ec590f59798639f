//! Dispatcher loop: converts teloxide messages and callback queries to core events and passes
//! them to the [`HandlerChain`]. Updates from one chat are handled in arrival order.

use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::{CallbackQuery, Message, Update},
};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::chain::HandlerChain;
use crate::core::{Event, ToCoreEvent};

/// Runs the handler chain for one event. Failures are logged; the loop keeps going.
pub async fn dispatch_event(chain: &HandlerChain, event: &Event) {
    if let Err(e) = chain.handle(event).await {
        error!(error = %e, user_id = event.user.id, chat_id = event.chat.id, "Handler chain failed");
    }
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.text().is_none() {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    }
    let event = TelegramMessageWrapper(&msg).to_core();
    dispatch_event(&chain, &event).await;
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    let event = TelegramCallbackWrapper(&query).to_core();
    dispatch_event(&chain, &event).await;
    Ok(())
}

/// Starts long polling with the given teloxide Bot and chain; returns on Ctrl-C.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: Bot, handler_chain: HandlerChain) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!(handlers = handler_chain.len(), "Starting dispatcher with long polling");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    warn!("Dispatcher stopped");
}
