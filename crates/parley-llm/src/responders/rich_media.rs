use anyhow::Result;
use async_trait::async_trait;
use parley_types::ResponderKind;

use crate::templates::{RICH_MEDIA_RULES, WELCOME_SAMPLE};
use crate::traits::{Reply, ReplyRequest, Responder};

/// Picks a canned markdown sample (image, video, table, formula, code) by keyword
#[derive(Debug, Clone, Default)]
pub struct RichMediaResponder;

impl RichMediaResponder {
    pub fn select(message: &str) -> &'static str {
        let lower = message.to_lowercase();
        RICH_MEDIA_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, body)| *body)
            .unwrap_or(WELCOME_SAMPLE)
    }
}

#[async_trait]
impl Responder for RichMediaResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::RichMedia
    }

    async fn respond(&self, request: ReplyRequest) -> Result<Reply> {
        Ok(Reply::text(Self::select(&request.message)))
    }
}
