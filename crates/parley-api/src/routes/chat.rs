use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use parley_llm::{ReplyRequest, ResponderFactory};
use parley_persist::PersistError;
use parley_types::Turn;
use crate::{error::ApiResult, routes::required, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Optional; when present it must name a registered user
    pub user_id: Option<String>,
    pub thread_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
    /// `text` or `image`
    #[serde(rename = "type")]
    pub reply_type: String,
    pub memory_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Send a message to a thread and get the canned reply
///
/// The reply is generated from the thread's memory window, then the exchange
/// is appended to the thread's log and window. With a `user_id`, the thread
/// must be theirs; a thread id they have not used before becomes theirs.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply generated", body = ChatResponse),
        (status = 400, description = "Missing thread_id or message", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown user, deleted thread or thread of another user", body = crate::error::ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload?;
    let thread_id = required(req.thread_id, "thread_id")?;
    let message = required(req.message, "message")?;

    let user_id = req
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    if let Some(user_id) = user_id.as_deref() {
        state.store.get_user(user_id)?;
        match state.store.get_thread(&thread_id) {
            Ok(thread) if thread.user_id != user_id => {
                return Err(PersistError::ThreadNotFound(thread_id).into());
            }
            Ok(_) | Err(PersistError::ThreadNotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let mut request = ReplyRequest::new(message.clone());
    if ResponderFactory::uses_context(state.responder.kind()) {
        request = request.with_context(state.store.get_memory_context(&thread_id)?);
    }
    let reply = state.responder.respond(request).await?;

    let memory_size = state.store.append_message(
        &thread_id,
        user_id.as_deref(),
        Turn::new(reply.logged_message(&message), reply.content.clone()),
        reply.image_url.clone(),
    )?;

    tracing::debug!(
        thread_id = %thread_id,
        responder = %state.responder.kind(),
        memory_size = memory_size,
        "Chat reply stored"
    );

    Ok(Json(ChatResponse {
        response: reply.content,
        reply_type: reply.kind.as_str().to_string(),
        memory_size,
        image_url: reply.image_url,
        prompt: reply.prompt,
    }))
}
