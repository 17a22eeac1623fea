use anyhow::Result;
use async_trait::async_trait;
use parley_types::ResponderKind;
use serde::{Deserialize, Serialize};

use crate::context::ContextWindow;

/// Produces the assistant reply for one chat message
///
/// Implementations here are canned stand-ins for a model call; the trait is
/// the seam where a real client would plug in.
#[async_trait]
pub trait Responder: Send + Sync {
    fn kind(&self) -> ResponderKind;

    async fn respond(&self, request: ReplyRequest) -> Result<Reply>;
}

#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub message: String,
    pub context: ContextWindow,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: ContextWindow::default(),
        }
    }

    pub fn with_context(mut self, context: impl Into<ContextWindow>) -> Self {
        self.context = context.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Text,
    Image,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Text => "text",
            ReplyKind::Image => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub kind: ReplyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: ReplyKind::Text,
            image_url: None,
            prompt: None,
        }
    }

    pub fn image(
        content: impl Into<String>,
        image_url: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind: ReplyKind::Image,
            image_url: Some(image_url.into()),
            prompt: Some(prompt.into()),
        }
    }

    /// User text to record in the thread log for this reply. Image replies
    /// record the normalised request rather than the raw message.
    pub fn logged_message(&self, message: &str) -> String {
        match (self.kind, self.prompt.as_deref()) {
            (ReplyKind::Image, Some(prompt)) => format!("Generate image of {}", prompt),
            _ => message.to_string(),
        }
    }
}
