use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body returned by `POST /chat`. Anything without a string `reply`
/// fails to decode.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
}

// Object {
//     "status": String("ok"),
//     "tools_count": Number(2),
//     "agent_initialized": Bool(true)
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub tools_count: usize,
    #[serde(default)]
    pub agent_initialized: bool,
}
