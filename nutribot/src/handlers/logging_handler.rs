//! Logs every inbound event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Event, EventKind, Handler, HandlerResponse, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        match &event.kind {
            EventKind::Text { text, .. } => info!(
                user_id = event.user.id,
                username = %event.user.log_name(),
                chat_id = event.chat.id,
                message_content = %text,
                "Received message"
            ),
            EventKind::Callback { data, .. } => info!(
                user_id = event.user.id,
                username = %event.user.log_name(),
                chat_id = event.chat.id,
                callback_data = %data,
                "Received button callback"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.len()),
            _ => None,
        };
        debug!(
            user_id = event.user.id,
            response = ?response,
            reply_len = ?reply_len,
            "Processed event"
        );
        Ok(())
    }
}
