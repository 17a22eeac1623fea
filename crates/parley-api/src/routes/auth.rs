use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{error::ApiResult, routes::required, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    /// Display name; defaults to the local part of the email
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub user_id: String,
    pub name: String,
}

/// Log in, registering the user on first sight
///
/// Logging in again with the same email returns the same user id and keeps
/// the name given at first login.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Missing email", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;
    let email = required(req.email, "email")?;

    let user = state.store.register_or_get_user(&email, req.name.as_deref())?;

    Ok(Json(LoginResponse {
        status: "logged_in".to_string(),
        user_id: user.id,
        name: user.name,
    }))
}
