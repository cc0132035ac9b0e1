//! The core models for a conversation with the tutor.
use serde::{Deserialize, Serialize};

/// First message of every session.
pub const GREETING: &str = "Hello! I'm your Smart Tutor. How can I help you with your notes today?";

/// Shown in place of a reply whenever the service call fails.
pub const CONNECTION_ERROR_NOTICE: &str = "⚠️ Error connecting to backend. Is uvicorn running?";

/// Payload sent by the quiz action.
pub const QUIZ_TRIGGER: &str = "quiz";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "tutor")]
    Tutor,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn new(sender: Sender, text: &str) -> Self {
        Self {
            text: text.to_string(),
            sender,
        }
    }

    pub fn user(text: &str) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn tutor(text: &str) -> Self {
        Self::new(Sender::Tutor, text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }
}

/// Ordered, append-only list of messages. Entries are never removed
/// or reordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn with_greeting() -> Self {
        Self(vec![Message::tutor(GREETING)])
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
