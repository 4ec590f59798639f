//! Handler implementations and the shared [`Conversation`] services they run on.

mod chat_handler;
mod command_handler;
mod conversation;
mod logging_handler;
pub mod replies;
mod topic_handler;

pub use chat_handler::ChatHandler;
pub use command_handler::CommandHandler;
pub use conversation::Conversation;
pub use logging_handler::LoggingHandler;
pub use topic_handler::TopicChoiceHandler;
