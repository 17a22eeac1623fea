pub mod auth;
pub mod chat;
pub mod docs;
pub mod health;
pub mod messages;
pub mod threads;

use crate::error::{ApiError, ApiResult};

/// Unwrap a required request field, rejecting absent or blank values
pub(crate) fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{} is required", field)))
}
