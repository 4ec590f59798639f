//! Platform user identity.

use serde::{Deserialize, Serialize};

/// User identity as delivered by the platform. `id` keys the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl User {
    /// Name for log lines: `@username`, else first name, else the numeric id.
    pub fn log_name(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(username), _) => format!("@{}", username),
            (None, Some(first_name)) => first_name.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}
