//! Shared services for handlers and the start / restart flows several handlers replay.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::replies;
use crate::assistant::Assistant;
use crate::core::{Bot, Chat, Event, Keyboard, Photo, Result};
use crate::session::SessionStore;

/// Everything a handler needs: outbound bot, session store, remote APIs, and the logo to greet with.
#[derive(Clone)]
pub struct Conversation {
    pub bot: Arc<dyn Bot>,
    pub sessions: Arc<dyn SessionStore>,
    pub assistant: Assistant,
    pub logo_path: Option<PathBuf>,
}

impl Conversation {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: Arc<dyn SessionStore>,
        assistant: Assistant,
        logo_path: Option<PathBuf>,
    ) -> Self {
        Self {
            bot,
            sessions,
            assistant,
            logo_path,
        }
    }

    /// Sends `text` with the restart keyboard.
    pub async fn reply(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(chat, text, replies::restart_keyboard())
            .await
    }

    /// Greets the user: logo (best effort), welcome with restart keyboard, then the topic menu.
    #[instrument(skip(self, event), fields(user_id = event.user.id))]
    pub async fn start(&self, event: &Event) -> Result<()> {
        self.sessions.get_or_create(event.user.id).await?;
        self.send_logo(&event.chat).await;
        self.reply(&event.chat, replies::WELCOME).await?;
        self.bot
            .send_message(&event.chat, replies::WELCOME, replies::topic_menu())
            .await?;
        info!(user_id = event.user.id, "Start menu sent");
        Ok(())
    }

    /// Clears the session, confirms with the keyboard removed, then replays [`Conversation::start`].
    #[instrument(skip(self, event), fields(user_id = event.user.id))]
    pub async fn restart(&self, event: &Event) -> Result<()> {
        self.sessions.reset(event.user.id).await?;
        self.bot
            .send_message(&event.chat, replies::RESTARTED, Keyboard::Remove)
            .await?;
        info!(user_id = event.user.id, "Session restarted");
        self.start(event).await
    }

    async fn send_logo(&self, chat: &Chat) {
        let Some(path) = &self.logo_path else {
            return;
        };
        if !path.is_file() {
            warn!(path = %path.display(), "Logo file not found, skipping");
            return;
        }
        if let Err(e) = self
            .bot
            .send_photo(chat, &Photo::File(path.clone()), Keyboard::None)
            .await
        {
            warn!(error = %e, path = %path.display(), "Failed to send logo");
        }
    }
}
