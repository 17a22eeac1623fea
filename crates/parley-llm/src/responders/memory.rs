use anyhow::Result;
use async_trait::async_trait;
use parley_types::ResponderKind;

use crate::traits::{Reply, ReplyRequest, Responder};

/// Echo that reports how much of the memory window it was given
#[derive(Debug, Clone, Default)]
pub struct MemoryAwareResponder;

#[async_trait]
impl Responder for MemoryAwareResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Memory
    }

    async fn respond(&self, request: ReplyRequest) -> Result<Reply> {
        if request.context.is_empty() {
            return Ok(Reply::text(format!(
                "[New conversation] Response to: {}",
                request.message
            )));
        }

        tracing::trace!(transcript = %request.context.render(), "Replying with context");
        Ok(Reply::text(format!(
            "[Context aware] Response to: {} (considering previous: {} messages)",
            request.message,
            request.context.len()
        )))
    }
}
