//! Core types and traits: Handler, Bot, Event, HandlerResponse, error, logger. Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    parse_command, Chat, Command, Event, EventKind, Handler, HandlerResponse, Inbound,
    InlineButton, Keyboard, Photo, ToCoreEvent, User,
};
