use serde::{Deserialize, Serialize};

/// One user message together with the reply it received.
///
/// Turns are what the memory window holds and what responders read back as
/// conversational context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub message: String,
    pub response: String,
}

impl Turn {
    pub fn new(message: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: response.into(),
        }
    }
}

impl From<(String, String)> for Turn {
    fn from((message, response): (String, String)) -> Self {
        Self { message, response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_from_pair() {
        let turn: Turn = ("hi".to_string(), "hello".to_string()).into();
        assert_eq!(turn, Turn::new("hi", "hello"));
    }

    #[test]
    fn test_turn_serialization() {
        let json = serde_json::to_string(&Turn::new("hi", "hello")).unwrap();
        assert_eq!(json, r#"{"message":"hi","response":"hello"}"#);
    }
}
