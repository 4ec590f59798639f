//! Free-text questions: restart keywords, otherwise completion + illustration.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{replies, Conversation};
use crate::assistant::APOLOGY;
use crate::core::{Event, Handler, HandlerResponse, Inbound, Photo, Result};

/// Answers free text under the user's topic and follows up with a generated image.
///
/// A failed completion is answered with the apology alone; the apology is never illustrated.
#[derive(Clone)]
pub struct ChatHandler {
    conversation: Conversation,
}

impl ChatHandler {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }
}

#[async_trait]
impl Handler for ChatHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Inbound::Text(text) = event.classify() else {
            return Ok(HandlerResponse::Continue);
        };

        if replies::is_restart_keyword(text) {
            self.conversation.restart(event).await?;
            return Ok(HandlerResponse::Stop);
        }

        let topic = self.conversation.sessions.topic(event.user.id).await?;
        let answer = match self.conversation.assistant.try_answer(text, topic).await {
            Ok(answer) => answer,
            Err(_) => {
                self.conversation.reply(&event.chat, APOLOGY).await?;
                return Ok(HandlerResponse::Reply(APOLOGY.to_string()));
            }
        };
        self.conversation.reply(&event.chat, &answer).await?;

        if let Some(url) = self.conversation.assistant.illustrate(&answer).await {
            match self
                .conversation
                .bot
                .send_photo(&event.chat, &Photo::Url(url), replies::restart_keyboard())
                .await
            {
                Ok(()) => info!(user_id = event.user.id, "Illustration sent"),
                Err(e) => warn!(user_id = event.user.id, error = %e, "Failed to send illustration"),
            }
        }

        Ok(HandlerResponse::Reply(answer))
    }
}
