//! Topic menu button taps.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{replies, Conversation};
use crate::core::{Event, Handler, HandlerResponse, Inbound, Keyboard, Result};
use crate::session::Topic;

/// Stores the chosen topic and turns the menu into a "what is your question?" prompt.
#[derive(Clone)]
pub struct TopicChoiceHandler {
    conversation: Conversation,
}

impl TopicChoiceHandler {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }
}

#[async_trait]
impl Handler for TopicChoiceHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Inbound::Callback { data, message_id } = event.classify() else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(topic) = Topic::from_callback_data(data) else {
            warn!(user_id = event.user.id, callback_data = %data, "Unknown callback data, ignored");
            return Ok(HandlerResponse::Stop);
        };

        self.conversation
            .sessions
            .set_topic(event.user.id, topic)
            .await?;
        info!(user_id = event.user.id, topic = %topic, "Topic selected");

        let text = replies::topic_selected(topic);
        match message_id {
            Some(id) => {
                self.conversation
                    .bot
                    .edit_message(&event.chat, id, &text)
                    .await?
            }
            None => {
                self.conversation
                    .bot
                    .send_message(&event.chat, &text, Keyboard::None)
                    .await?
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
