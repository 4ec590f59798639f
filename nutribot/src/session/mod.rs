//! Per-user session state: the conversation [`Topic`] and the meal log.

mod store;
mod topic;

pub use store::{InMemorySessionStore, Session, SessionStore, MEAL_SEPARATOR};
pub use topic::Topic;
