//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends via Telegram;
//! tests substitute a recording Bot.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton,
        KeyboardMarkup, KeyboardRemove, MessageId, ReplyMarkup,
    },
};

use crate::core::{parse_message_id, Bot as CoreBot, BotError, Chat, Keyboard, Photo, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Maps core markup onto Telegram reply markup; [`Keyboard::None`] sends none.
pub fn to_reply_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::None => None,
        Keyboard::Reply(rows) => Some(ReplyMarkup::Keyboard(
            KeyboardMarkup::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>()),
            )
            .resize_keyboard(),
        )),
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        Keyboard::Inline(rows) => Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(
            rows.into_iter().map(|row| {
                row.into_iter()
                    .map(|button| InlineKeyboardButton::callback(button.label, button.data))
                    .collect::<Vec<_>>()
            }),
        ))),
    }
}

fn to_input_file(photo: &Photo) -> Result<InputFile> {
    match photo {
        Photo::Url(url) => reqwest::Url::parse(url)
            .map(InputFile::url)
            .map_err(|e| BotError::Bot(format!("Invalid photo url {}: {}", url, e))),
        Photo::File(path) => Ok(InputFile::file(path.clone())),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str, keyboard: Keyboard) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if let Some(markup) = to_reply_markup(keyboard) {
            request = request.reply_markup(markup);
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: &Photo, keyboard: Keyboard) -> Result<()> {
        let mut request = self.bot.send_photo(ChatId(chat.id), to_input_file(photo)?);
        if let Some(markup) = to_reply_markup(keyboard) {
            request = request.reply_markup(markup);
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
