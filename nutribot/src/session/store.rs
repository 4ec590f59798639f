//! Per-user session records and the store that owns them.
//!
//! Sessions live in process memory only; a restart of the process forgets them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::topic::Topic;
use crate::core::Result;

/// Separator between entries of a meal log.
pub const MEAL_SEPARATOR: &str = ", ";

/// Per-user record: current topic and the meals logged so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub topic: Topic,
    pub meals: Option<String>,
}

impl Session {
    /// Appends a meal to the log, joining entries with [`MEAL_SEPARATOR`].
    pub fn log_meal(&mut self, meal: &str) {
        match self.meals.as_mut() {
            Some(log) => {
                log.push_str(MEAL_SEPARATOR);
                log.push_str(meal);
            }
            None => self.meals = Some(meal.to_string()),
        }
    }
}

/// Session storage keyed by platform user id. Every mutation is atomic per call.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session if one exists.
    async fn get(&self, user_id: i64) -> Result<Option<Session>>;

    /// Returns the session, creating a default one if absent.
    async fn get_or_create(&self, user_id: i64) -> Result<Session>;

    /// Sets the topic, creating the session if absent.
    async fn set_topic(&self, user_id: i64, topic: Topic) -> Result<()>;

    /// Appends a meal to the user's log and returns the updated session.
    async fn log_meal(&self, user_id: i64, meal: &str) -> Result<Session>;

    /// Drops the session; the next access starts from defaults.
    async fn reset(&self, user_id: i64) -> Result<()>;

    /// Current topic; [`Topic::General`] when no session exists.
    async fn topic(&self, user_id: i64) -> Result<Topic> {
        Ok(self.get(user_id).await?.map(|s| s.topic).unwrap_or_default())
    }
}

/// In-memory session store. Read-modify-write happens under one write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(&user_id).cloned())
    }

    async fn get_or_create(&self, user_id: i64) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_insert_with(|| {
            debug!(user_id = user_id, "Session created");
            Session::default()
        });
        Ok(session.clone())
    }

    async fn set_topic(&self, user_id: i64, topic: Topic) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.entry(user_id).or_default().topic = topic;
        debug!(user_id = user_id, topic = %topic, "Session topic set");
        Ok(())
    }

    async fn log_meal(&self, user_id: i64, meal: &str) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_default();
        session.log_meal(meal);
        Ok(session.clone())
    }

    async fn reset(&self, user_id: i64) -> Result<()> {
        self.sessions.write().await.remove(&user_id);
        debug!(user_id = user_id, "Session reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_log_meal_joins_entries() {
        let mut session = Session::default();
        session.log_meal("breakfast");
        assert_eq!(session.meals.as_deref(), Some("breakfast"));
        session.log_meal("lunch");
        assert_eq!(session.meals.as_deref(), Some("breakfast, lunch"));
    }

    #[tokio::test]
    async fn test_topic_defaults_to_general_without_session() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.topic(1).await.unwrap(), Topic::General);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_or_create_is_lazy_and_idempotent() {
        let store = InMemorySessionStore::new();
        assert!(store.get(5).await.unwrap().is_none());
        store.set_topic(5, Topic::Health).await.unwrap();
        let session = store.get_or_create(5).await.unwrap();
        assert_eq!(session.topic, Topic::Health);
        assert_eq!(store.len().await, 1);
    }
}
