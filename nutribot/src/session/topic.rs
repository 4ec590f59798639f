//! Conversation topic: selects the system instruction sent with every completion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-scoped conversation mode. Sessions without an explicit choice use [`Topic::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Health,
    Nutrition,
    #[default]
    General,
}

impl Topic {
    /// Menu order.
    pub const ALL: [Topic; 3] = [Topic::Health, Topic::Nutrition, Topic::General];

    /// System instruction for completion requests made under this topic.
    pub fn system_instruction(self) -> &'static str {
        match self {
            Topic::Health => "You are an assistant focused solely on health topics. Please respond only to questions related to health.",
            Topic::Nutrition => "You are an assistant focused solely on nutrition topics. Please respond only to questions related to nutrition.",
            Topic::General => "You are an assistant focused solely on health and nutrition. Please respond only to questions related to these topics.",
        }
    }

    /// Callback data carried by this topic's menu button.
    pub fn callback_data(self) -> &'static str {
        match self {
            Topic::Health => "health",
            Topic::Nutrition => "nutrition",
            Topic::General => "open_question",
        }
    }

    /// Parses menu callback data; unknown values yield None.
    pub fn from_callback_data(data: &str) -> Option<Topic> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.callback_data() == data)
    }

    /// Button label shown in the topic menu.
    pub fn label(self) -> &'static str {
        match self {
            Topic::Health => "General Health",
            Topic::Nutrition => "Nutrition",
            Topic::General => "Open Question",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Health => "health",
            Topic::Nutrition => "nutrition",
            Topic::General => "general",
        };
        f.write_str(name)
    }
}
