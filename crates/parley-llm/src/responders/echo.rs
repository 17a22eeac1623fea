use anyhow::Result;
use async_trait::async_trait;
use parley_types::ResponderKind;

use crate::traits::{Reply, ReplyRequest, Responder};

/// Answers every message with `Response to: {message}`
#[derive(Debug, Clone, Default)]
pub struct EchoResponder;

#[async_trait]
impl Responder for EchoResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Echo
    }

    async fn respond(&self, request: ReplyRequest) -> Result<Reply> {
        Ok(Reply::text(format!("Response to: {}", request.message)))
    }
}
