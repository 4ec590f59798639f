//! Transport-agnostic reply markup and photo sources.

use std::path::PathBuf;

/// One inline button: visible label and the callback data it sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

/// Markup attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Keyboard {
    #[default]
    None,
    /// Persistent reply keyboard; rows of button labels, resized to fit.
    Reply(Vec<Vec<String>>),
    /// Removes any reply keyboard the user currently sees.
    Remove,
    /// Inline buttons under the message; rows of buttons.
    Inline(Vec<Vec<InlineButton>>),
}

/// Where an outbound photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    Url(String),
    File(PathBuf),
}
