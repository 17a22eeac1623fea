use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use parley_persist::Thread;
use crate::{error::ApiResult, routes::required, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateThreadRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateThreadResponse {
    pub thread_id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RenameThreadRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThreadResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListThreadsResponse {
    pub threads: Vec<ThreadResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    fn new(status: &str) -> Json<Self> {
        Json(Self {
            status: status.to_string(),
        })
    }
}

/// Create a new thread for a registered user
#[utoipa::path(
    post,
    path = "/threads",
    request_body = CreateThreadRequest,
    responses(
        (status = 201, description = "Thread created", body = CreateThreadResponse),
        (status = 400, description = "Missing user_id", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    ),
    tag = "threads"
)]
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateThreadRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateThreadResponse>)> {
    let Json(req) = payload?;
    let user_id = required(req.user_id, "user_id")?;

    let thread = state.store.create_thread(&user_id)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateThreadResponse {
            thread_id: thread.id,
            name: thread.name,
        }),
    ))
}

/// List a user's threads in creation order
#[utoipa::path(
    get,
    path = "/threads/{user_id}",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Threads of the user", body = ListThreadsResponse)
    ),
    tag = "threads"
)]
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ListThreadsResponse>> {
    let threads = state
        .store
        .list_threads(&user_id)?
        .into_iter()
        .map(thread_to_response)
        .collect();

    Ok(Json(ListThreadsResponse { threads }))
}

/// Rename a thread
#[utoipa::path(
    put,
    path = "/threads/{thread_id}",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    request_body = RenameThreadRequest,
    responses(
        (status = 200, description = "Thread renamed", body = StatusResponse),
        (status = 400, description = "Missing name", body = crate::error::ErrorResponse),
        (status = 404, description = "Thread not found", body = crate::error::ErrorResponse)
    ),
    tag = "threads"
)]
pub async fn rename_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    payload: Result<Json<RenameThreadRequest>, JsonRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let Json(req) = payload?;
    let name = required(req.name, "name")?;

    state.store.rename_thread(&thread_id, &name)?;

    Ok(StatusResponse::new("updated"))
}

/// Delete a thread together with its messages and memory
///
/// Deleting a thread that does not exist still succeeds.
#[utoipa::path(
    delete,
    path = "/threads/{thread_id}",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    responses(
        (status = 200, description = "Thread deleted", body = StatusResponse)
    ),
    tag = "threads"
)]
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    state.store.delete_thread(&thread_id)?;
    Ok(StatusResponse::new("deleted"))
}

fn thread_to_response(thread: Thread) -> ThreadResponse {
    ThreadResponse {
        id: thread.id,
        user_id: thread.user_id,
        name: thread.name,
        created_at: thread.created_at,
    }
}
