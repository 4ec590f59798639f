//! Slash commands: /start, /restart, /help, /nutritional_info, /log_meal, /diet_plan, /tips.

use async_trait::async_trait;
use tracing::{info, instrument};

use super::{replies, Conversation};
use crate::core::{Command, Event, Handler, HandlerResponse, Inbound, Result};

/// Handles command events; everything else continues down the chain.
#[derive(Clone)]
pub struct CommandHandler {
    conversation: Conversation,
}

impl CommandHandler {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }

    /// Completes `prompt` under the user's topic and relays the answer.
    async fn relay(&self, event: &Event, prompt: &str) -> Result<HandlerResponse> {
        let topic = self.conversation.sessions.topic(event.user.id).await?;
        let answer = self.conversation.assistant.answer(prompt, topic).await;
        self.conversation.reply(&event.chat, &answer).await?;
        Ok(HandlerResponse::Reply(answer))
    }

    async fn nutritional_info(&self, event: &Event, command: &Command<'_>) -> Result<HandlerResponse> {
        match command.required_args() {
            Ok(food) => self.relay(event, &replies::nutritional_info_prompt(food)).await,
            Err(e) => {
                info!(user_id = event.user.id, error = %e, "Asking for food name");
                self.conversation.reply(&event.chat, replies::ASK_FOOD).await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }

    async fn log_meal(&self, event: &Event, command: &Command<'_>) -> Result<HandlerResponse> {
        let text = match command.required_args() {
            Ok(meal) => {
                let session = self
                    .conversation
                    .sessions
                    .log_meal(event.user.id, meal)
                    .await?;
                info!(
                    user_id = event.user.id,
                    meals = %session.meals.as_deref().unwrap_or_default(),
                    "Meal logged"
                );
                replies::MEAL_LOGGED
            }
            Err(e) => {
                info!(user_id = event.user.id, error = %e, "Asking for meal");
                replies::ASK_MEAL
            }
        };
        self.conversation.reply(&event.chat, text).await?;
        Ok(HandlerResponse::Stop)
    }

    async fn diet_plan(&self, event: &Event) -> Result<HandlerResponse> {
        let session = self.conversation.sessions.get(event.user.id).await?;
        let meals = session.as_ref().and_then(|s| s.meals.as_deref());
        self.relay(event, &replies::diet_plan_prompt(meals)).await
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Inbound::Command(command) = event.classify() else {
            return Ok(HandlerResponse::Continue);
        };
        info!(user_id = event.user.id, command = %command.name, "Dispatching command");

        match command.name {
            "start" => {
                self.conversation.start(event).await?;
                Ok(HandlerResponse::Stop)
            }
            "restart" => {
                self.conversation.restart(event).await?;
                Ok(HandlerResponse::Stop)
            }
            "help" => {
                self.conversation.reply(&event.chat, replies::HELP).await?;
                Ok(HandlerResponse::Stop)
            }
            "nutritional_info" => self.nutritional_info(event, &command).await,
            "log_meal" => self.log_meal(event, &command).await,
            "diet_plan" => self.diet_plan(event).await,
            "tips" => self.relay(event, replies::TIPS_PROMPT).await,
            _ => {
                self.conversation
                    .reply(&event.chat, replies::UNKNOWN_COMMAND)
                    .await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
