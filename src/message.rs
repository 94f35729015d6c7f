// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_PARTNER_NAME: &str = "유키";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One turn of a conversation, in the shape the completion API expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: MessageRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Raw turns; only the forwarded window is parsed into [`ConversationTurn`]s.
    #[serde(default)]
    pub history: Vec<Value>,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_partner_name")]
    pub partner_name: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body shared by the translate and furigana endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FuriganaResponse {
    pub furigana: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

fn default_partner_name() -> String {
    DEFAULT_PARTNER_NAME.to_string()
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

fn default_topic() -> String {
    "free".to_string()
}
