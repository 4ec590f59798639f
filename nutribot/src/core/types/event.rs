//! Inbound platform events and their classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};
use crate::core::error::HandlerError;

/// What arrived from the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A text message (commands included).
    Text { message_id: String, text: String },
    /// An inline button tap. `message_id` is the message carrying the button, when still accessible.
    Callback {
        message_id: Option<String>,
        data: String,
    },
}

/// One inbound event with its sender and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub user: User,
    pub chat: Chat,
    pub kind: EventKind,
    pub received_at: DateTime<Utc>,
}

/// A slash command split into name (no slash, no `@bot` suffix) and trimmed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: &'a str,
}

impl<'a> Command<'a> {
    /// Arguments, or [`HandlerError::MissingArgument`] when the command was sent bare.
    pub fn required_args(&self) -> Result<&'a str, HandlerError> {
        if self.args.is_empty() {
            Err(HandlerError::MissingArgument(self.name.to_string()))
        } else {
            Ok(self.args)
        }
    }
}

/// Routing class of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound<'a> {
    Command(Command<'a>),
    Callback {
        data: &'a str,
        message_id: Option<&'a str>,
    },
    Text(&'a str),
}

/// Parses `/name@bot args` into a [`Command`]. Returns None for text not starting with `/`.
pub fn parse_command(text: &str) -> Option<Command<'_>> {
    let rest = text.trim_start().strip_prefix('/')?;
    let (head, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some(Command { name, args })
}

impl Event {
    /// Builds a text event received now.
    pub fn text(user: User, chat: Chat, message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user,
            chat,
            kind: EventKind::Text {
                message_id: message_id.into(),
                text: text.into(),
            },
            received_at: Utc::now(),
        }
    }

    /// Builds a callback event received now.
    pub fn callback(user: User, chat: Chat, message_id: Option<String>, data: impl Into<String>) -> Self {
        Self {
            user,
            chat,
            kind: EventKind::Callback {
                message_id,
                data: data.into(),
            },
            received_at: Utc::now(),
        }
    }

    /// Classifies the event as command, button callback, or free text.
    pub fn classify(&self) -> Inbound<'_> {
        match &self.kind {
            EventKind::Text { text, .. } => match parse_command(text) {
                Some(command) => Inbound::Command(command),
                None => Inbound::Text(text),
            },
            EventKind::Callback { message_id, data } => Inbound::Callback {
                data,
                message_id: message_id.as_deref(),
            },
        }
    }
}
