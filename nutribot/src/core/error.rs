//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] describes bad user input that handlers
//! answer with a prompt instead of failing.

use thiserror::Error;

/// Top-level error (startup configuration, platform transport).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

/// Input problems detected by handlers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Missing argument for /{0}")]
    MissingArgument(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
