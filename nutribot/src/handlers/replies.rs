//! User-facing texts, canned prompts, and keyboards.

use crate::core::{InlineButton, Keyboard};
use crate::session::Topic;

pub const WELCOME: &str = "I am a health and nutrition chatbot. Choose a topic to get started.";
pub const HELP: &str = "You can ask questions about general health, nutrition, or any related topic. Use /start to begin again.";
pub const RESTARTED: &str = "The chat has been restarted.";
pub const ASK_FOOD: &str = "Please provide the name of the food.";
pub const ASK_MEAL: &str = "Please provide the meal you want to log.";
pub const MEAL_LOGGED: &str = "Meal logged successfully.";
pub const UNKNOWN_COMMAND: &str = "I don't know that command. Use /help to see what I can do.";

pub const TIPS_PROMPT: &str = "Provide some health and nutrition tips.";
pub const DIET_PLAN_PROMPT: &str = "Provide a personalized diet plan based on the user's information.";

/// Label of the reply-keyboard button; tapping it sends this text.
pub const RESTART_BUTTON: &str = "Restart";

/// Free-text messages (case-insensitive) that restart the conversation.
pub const RESTART_KEYWORDS: [&str; 2] = ["restart", "exit"];

pub fn is_restart_keyword(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    RESTART_KEYWORDS.contains(&text.as_str())
}

pub fn topic_selected(topic: Topic) -> String {
    format!("You selected {}. What is your question?", topic.label())
}

pub fn nutritional_info_prompt(food: &str) -> String {
    format!("Provide the nutritional information for {}.", food)
}

/// Diet-plan prompt, grounded on the meal log when the user has one.
pub fn diet_plan_prompt(meals: Option<&str>) -> String {
    match meals {
        Some(meals) => format!("{} Meals logged so far: {}.", DIET_PLAN_PROMPT, meals),
        None => DIET_PLAN_PROMPT.to_string(),
    }
}

/// Single resized "Restart" button shown under ordinary replies.
pub fn restart_keyboard() -> Keyboard {
    Keyboard::Reply(vec![vec![RESTART_BUTTON.to_string()]])
}

/// One button per topic, one per row.
pub fn topic_menu() -> Keyboard {
    Keyboard::Inline(
        Topic::ALL
            .into_iter()
            .map(|topic| {
                vec![InlineButton {
                    label: topic.label().to_string(),
                    data: topic.callback_data().to_string(),
                }]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_keywords_ignore_case_and_padding() {
        assert!(is_restart_keyword("Restart"));
        assert!(is_restart_keyword("  EXIT "));
        assert!(!is_restart_keyword("restart please"));
        assert!(!is_restart_keyword("/restart"));
    }

    #[test]
    fn test_topic_menu_has_three_buttons() {
        let Keyboard::Inline(rows) = topic_menu() else {
            panic!("topic menu must be inline");
        };
        let data: Vec<_> = rows.iter().flatten().map(|b| b.data.as_str()).collect();
        assert_eq!(data, ["health", "nutrition", "open_question"]);
    }

    #[test]
    fn test_diet_plan_prompt_includes_meals() {
        assert_eq!(diet_plan_prompt(None), DIET_PLAN_PROMPT);
        assert_eq!(
            diet_plan_prompt(Some("eggs, salad")),
            "Provide a personalized diet plan based on the user's information. Meals logged so far: eggs, salad."
        );
    }
}
