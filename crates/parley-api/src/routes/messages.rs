use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use parley_persist::{ChatMessage, MEMORY_WINDOW_CAPACITY};
use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub thread_id: String,
    pub message: String,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
    pub memory_size: usize,
    pub memory_max: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub chats: Vec<MessageResponse>,
}

/// List messages in a thread
///
/// Unknown and deleted threads have no messages.
#[utoipa::path(
    get,
    path = "/threads/{thread_id}/messages",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    responses(
        (status = 200, description = "Messages and memory usage", body = ListMessagesResponse)
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ListMessagesResponse>> {
    let messages = state
        .store
        .get_messages(&thread_id)?
        .into_iter()
        .map(message_to_response)
        .collect();
    let memory_size = state.store.memory_size(&thread_id)?;

    Ok(Json(ListMessagesResponse {
        messages,
        memory_size,
        memory_max: MEMORY_WINDOW_CAPACITY,
    }))
}

/// Every message a user has exchanged, across all of their threads
#[utoipa::path(
    get,
    path = "/chat-history/{user_id}",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Chat history", body = ChatHistoryResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    ),
    tag = "messages"
)]
pub async fn chat_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ChatHistoryResponse>> {
    state.store.get_user(&user_id)?;

    let chats = state
        .store
        .user_history(&user_id)?
        .into_iter()
        .map(message_to_response)
        .collect();

    Ok(Json(ChatHistoryResponse { chats }))
}

fn message_to_response(message: ChatMessage) -> MessageResponse {
    MessageResponse {
        thread_id: message.thread_id,
        message: message.message,
        response: message.response,
        image_url: message.image_url,
        created_at: message.created_at,
    }
}
