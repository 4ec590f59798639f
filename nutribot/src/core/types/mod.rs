//! Core types: user, chat, inbound event, outbound markup, handler response, and Handler trait.

mod chat;
mod event;
mod handler;
mod keyboard;
mod response;
mod user;

pub use chat::Chat;
pub use event::{parse_command, Command, Event, EventKind, Inbound};
pub use handler::{Handler, ToCoreEvent};
pub use keyboard::{InlineButton, Keyboard, Photo};
pub use response::HandlerResponse;
pub use user::User;
