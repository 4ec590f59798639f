//! Test doubles for handler and dispatcher tests: a recording [`MockBot`] and scripted
//! completion / image clients, plus helpers to build events and a wired handler chain.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use nutribot::{
    build_handler_chain, Assistant, Bot, Chat, CompletionClient, Conversation, Event,
    HandlerChain, ImageClient, InMemorySessionStore, Keyboard, Photo, Result, User,
};
use openai_client::ClientError;

/// One outbound call made through [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
        keyboard: Keyboard,
    },
    Photo {
        chat_id: i64,
        photo: Photo,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
    },
}

/// Mock Bot that records every outbound call in order.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts of sent messages (edits and photos excluded).
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Photo { photo, .. } => Some(photo),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str, keyboard: Keyboard) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: &Photo, _keyboard: Keyboard) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            photo: photo.clone(),
        });
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

/// One recorded completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionCall {
    pub system: String,
    pub prompt: String,
}

/// Completion client that records requests and answers with a fixed reply, or fails when
/// constructed with [`FakeCompletion::failing`].
pub struct FakeCompletion {
    reply: Option<String>,
    calls: Mutex<Vec<CompletionCall>>,
}

impl FakeCompletion {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for FakeCompletion {
    async fn complete(&self, system: &str, prompt: &str) -> std::result::Result<String, ClientError> {
        self.calls.lock().unwrap().push(CompletionCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });
        match self.reply {
            Some(ref reply) => Ok(reply.clone()),
            None => Err(ClientError::Transport("connection refused".to_string())),
        }
    }
}

/// Image client that records prompts and returns a fixed URL, or fails.
pub struct FakeImages {
    url: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn returning(url: &str) -> Arc<Self> {
        Arc::new(Self {
            url: Some(url.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            url: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageClient for FakeImages {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.url {
            Some(ref url) => Ok(url.clone()),
            None => Err(ClientError::Api {
                message: "content policy violation".to_string(),
                kind: Some("invalid_request_error".to_string()),
            }),
        }
    }
}

/// Everything a dispatcher test needs to drive events and inspect effects.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub sessions: Arc<InMemorySessionStore>,
    pub completion: Arc<FakeCompletion>,
    pub images: Arc<FakeImages>,
    pub chain: HandlerChain,
}

impl Harness {
    pub fn new(completion: Arc<FakeCompletion>, images: Arc<FakeImages>) -> Self {
        Self::with_logo(completion, images, None)
    }

    pub fn with_logo(
        completion: Arc<FakeCompletion>,
        images: Arc<FakeImages>,
        logo_path: Option<std::path::PathBuf>,
    ) -> Self {
        let bot = MockBot::new();
        let sessions = Arc::new(InMemorySessionStore::new());
        let assistant = Assistant::new(completion.clone(), images.clone());
        let conversation = Conversation::new(bot.clone(), sessions.clone(), assistant, logo_path);
        Self {
            bot,
            sessions,
            completion,
            images,
            chain: build_handler_chain(conversation),
        }
    }

    /// Sends a text (or command) from `user_id` in their private chat.
    pub async fn text(&self, user_id: i64, text: &str) {
        self.chain.handle(&text_event(user_id, text)).await.unwrap();
    }

    /// Taps an inline button on message `message_id`.
    pub async fn tap(&self, user_id: i64, message_id: Option<&str>, data: &str) {
        self.chain
            .handle(&callback_event(user_id, message_id, data))
            .await
            .unwrap();
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Test".to_string()),
    }
}

pub fn text_event(user_id: i64, text: &str) -> Event {
    Event::text(user(user_id), Chat::private(user_id), "100", text)
}

pub fn callback_event(user_id: i64, message_id: Option<&str>, data: &str) -> Event {
    Event::callback(
        user(user_id),
        Chat::private(user_id),
        message_id.map(str::to_string),
        data,
    )
}
