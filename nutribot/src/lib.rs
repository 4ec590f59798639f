//! # nutribot
//!
//! Health and nutrition assistant for Telegram. Inbound commands, topic-menu taps, and free-text
//! questions go through a [`HandlerChain`]; answers come from an OpenAI-compatible completion API
//! under a per-user topic, followed by a generated illustration.

pub mod assistant;
pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod session;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, parse_command, parse_message_id, Bot, BotError, Chat, Command, Event, EventKind,
    Handler, HandlerError, HandlerResponse, Inbound, InlineButton, Keyboard, Photo, Result,
    ToCoreEvent, User,
};

pub use assistant::{Assistant, CompletionClient, ImageClient, OpenAICompletion, APOLOGY};
pub use chain::HandlerChain;
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use handlers::{ChatHandler, CommandHandler, Conversation, LoggingHandler, TopicChoiceHandler};
pub use runner::run_bot;
pub use session::{InMemorySessionStore, Session, SessionStore, Topic};
pub use telegram::{run_dispatcher, TelegramBotAdapter};
