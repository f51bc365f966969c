use crate::domain::common::FixtureRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessageId(pub Uuid);

impl ChatMessageId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ChatMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// Message of the consultation chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Label of the document section the reply refers to
    pub document_ref: Option<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new_v4(),
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
            document_ref: None,
        }
    }

    pub fn assistant(text: impl Into<String>, document_ref: Option<String>) -> Self {
        Self {
            id: ChatMessageId::new_v4(),
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
            document_ref,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local wall-clock time, e.g. "14:05"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

impl FixtureRecord for ChatMessage {
    fn fixture_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "chat_message"
    }

    fn list_name() -> &'static str {
        "AI Chat"
    }
}
