//! Conversions from teloxide updates to core [`Event`]s.

use teloxide::types::{CallbackQuery, Message};

use crate::core::{Chat, Event, ToCoreEvent, User};

/// Telegram user → core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// Telegram chat → core chat.
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl<'a> TelegramChatWrapper<'a> {
    pub fn to_core(&self) -> Chat {
        let chat_type = if self.0.is_private() {
            "private"
        } else if self.0.is_group() || self.0.is_supergroup() {
            "group"
        } else {
            "channel"
        };
        Chat {
            id: self.0.id.0,
            chat_type: chat_type.to_string(),
        }
    }
}

/// Telegram text message → core text event.
pub struct TelegramMessageWrapper<'a>(pub &'a Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Event {
        let user = self
            .0
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or(User {
                id: self.0.chat.id.0,
                username: None,
                first_name: None,
            });
        Event::text(
            user,
            TelegramChatWrapper(&self.0.chat).to_core(),
            self.0.id.0.to_string(),
            self.0.text().unwrap_or_default(),
        )
    }
}

/// Telegram inline-button callback → core callback event.
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Event {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let chat = self
            .0
            .message
            .as_ref()
            .map(|m| TelegramChatWrapper(m.chat()).to_core())
            .unwrap_or_else(|| Chat::private(user.id));
        let message_id = self.0.message.as_ref().map(|m| m.id().0.to_string());
        Event::callback(
            user,
            chat,
            message_id,
            self.0.data.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teloxide_user(id: u64, username: Option<&str>) -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(id),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: username.map(str::to_string),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide_user(123, Some("testuser"));
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.log_name(), "@testuser");
    }

    #[test]
    fn test_telegram_user_wrapper_minimal() {
        let user = teloxide_user(456, None);
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 456);
        assert_eq!(core_user.username, None);
        assert_eq!(core_user.log_name(), "Test");
    }
}
