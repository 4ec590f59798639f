//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `crate::telegram`.

use async_trait::async_trait;

use crate::core::error::{BotError, Result};
use crate::core::types::{Chat, Keyboard, Photo};

/// Outbound side of the platform. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat with optional markup.
    async fn send_message(&self, chat: &Chat, text: &str, keyboard: Keyboard) -> Result<()>;
    /// Sends a photo (remote URL or local file) to the given chat.
    async fn send_photo(&self, chat: &Chat, photo: &Photo, keyboard: Keyboard) -> Result<()>;
    /// Replaces the text of an already-sent message (e.g. the topic menu after a choice).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
