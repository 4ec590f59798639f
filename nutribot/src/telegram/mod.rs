//! Telegram transport: update adapters, Bot implementation, dispatcher loop.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{
    TelegramCallbackWrapper, TelegramChatWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{to_reply_markup, TelegramBotAdapter};
pub use runner::{dispatch_event, run_dispatcher};
