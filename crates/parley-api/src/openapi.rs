use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{auth, chat, health, messages, threads};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parley API",
        description = "Chat threads with a rolling five-turn memory window"
    ),
    paths(
        health::health_check,
        auth::login,
        threads::create_thread,
        threads::list_threads,
        threads::rename_thread,
        threads::delete_thread,
        messages::list_messages,
        messages::chat_history,
        chat::chat,
    ),
    components(schemas(
        ErrorResponse,
        health::HealthResponse,
        auth::LoginRequest,
        auth::LoginResponse,
        threads::CreateThreadRequest,
        threads::CreateThreadResponse,
        threads::RenameThreadRequest,
        threads::ThreadResponse,
        threads::ListThreadsResponse,
        threads::StatusResponse,
        messages::MessageResponse,
        messages::ListMessagesResponse,
        messages::ChatHistoryResponse,
        chat::ChatRequest,
        chat::ChatResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Login and registration"),
        (name = "threads", description = "Thread management"),
        (name = "messages", description = "Stored messages and history"),
        (name = "chat", description = "Send a message and get a reply")
    )
)]
pub struct ApiDoc;
