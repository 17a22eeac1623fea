use chrono::{DateTime, Utc};
use parley_types::Turn;
use serde::{Deserialize, Serialize};

/// One stored exchange in a thread's message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub thread_id: String,
    pub message: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(thread_id: impl Into<String>, turn: Turn, image_url: Option<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            message: turn.message,
            response: turn.response,
            image_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_omitted_when_absent() {
        let msg = ChatMessage::new("1", Turn::new("hi", "hello"), None);
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("image_url").is_none());
        assert_eq!(json["thread_id"], "1");
    }
}
