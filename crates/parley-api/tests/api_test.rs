use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use parley_api::{build_router, config::Config, error::ApiError, AppState};
use parley_llm::{ResponderFactory, ResponderKind};
use parley_persist::{PersistError, SessionStore, SessionStoreBuilder};

fn app_with(kind: ResponderKind, lazy_threads: bool) -> Router {
    let store: Arc<dyn SessionStore> =
        Arc::new(SessionStoreBuilder::new().lazy_threads(lazy_threads).build());
    let state = AppState::new(Config::default(), store, ResponderFactory::create(kind));
    build_router(Arc::new(state))
}

fn app() -> Router {
    app_with(ResponderKind::Memory, true)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, email: &str) -> String {
    let (status, body) = send(app, "POST", "/login", Some(json!({ "email": email }))).await;
    assert_eq!(status, StatusCode::OK);
    body["user_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_is_idempotent() {
    let app = app();

    let (status, first) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "email": "a@x.com", "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "logged_in");
    assert_eq!(first["user_id"], "a_x_com");
    assert_eq!(first["name"], "Alice");

    let (_, second) = send(&app, "POST", "/auth/google", Some(json!({ "email": "a@x.com" }))).await;
    assert_eq!(second["user_id"], "a_x_com");
    assert_eq!(second["name"], "Alice");
}

#[tokio::test]
async fn test_login_requires_email() {
    let app = app();
    let (status, body) = send(&app, "POST", "/login", Some(json!({ "name": "Bob" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email is required"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_thread_lifecycle() {
    let app = app();
    let user_id = login(&app, "a@x.com").await;

    let (status, created) = send(&app, "POST", "/threads", Some(json!({ "user_id": user_id }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["thread_id"], "1");
    assert_eq!(created["name"], "Thread 1");

    let (status, body) = send(
        &app,
        "PUT",
        "/threads/1",
        Some(json!({ "name": "Trip planning" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "updated");

    let (_, listed) = send(&app, "GET", &format!("/threads/{}", user_id), None).await;
    let threads = listed["threads"].as_array().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["id"], "1");
    assert_eq!(threads[0]["name"], "Trip planning");

    let (status, body) = send(&app, "DELETE", "/threads/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deleted");

    let (_, listed) = send(&app, "GET", &format!("/threads/{}", user_id), None).await;
    assert!(listed["threads"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", "/threads/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_thread_for_unknown_user_is_not_found() {
    let app = app();
    let (status, body) = send(&app, "POST", "/threads", Some(json!({ "user_id": "ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_rename_unknown_thread_is_not_found() {
    let app = app();
    let (status, _) = send(&app, "PUT", "/threads/999", Some(json!({ "name": "Nope" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_fills_memory_window() {
    let app = app();
    let user_id = login(&app, "a@x.com").await;
    send(&app, "POST", "/threads", Some(json!({ "user_id": user_id }))).await;

    let (status, first) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "user_id": user_id, "thread_id": "1", "message": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["response"], "[New conversation] Response to: hello");
    assert_eq!(first["type"], "text");
    assert_eq!(first["memory_size"], 1);
    assert!(first.get("image_url").is_none());

    let mut last = Value::Null;
    for n in 0..6 {
        let (_, body) = send(
            &app,
            "POST",
            "/chat",
            Some(json!({ "thread_id": "1", "message": format!("m{}", n) })),
        )
        .await;
        last = body;
    }
    assert_eq!(last["memory_size"], 5);
    assert_eq!(
        last["response"],
        "[Context aware] Response to: m5 (considering previous: 5 messages)"
    );

    let (_, messages) = send(&app, "GET", "/threads/1/messages", None).await;
    assert_eq!(messages["messages"].as_array().unwrap().len(), 7);
    assert_eq!(messages["messages"][0]["message"], "hello");
    assert_eq!(messages["memory_size"], 5);
    assert_eq!(messages["memory_max"], 5);

    let (status, history) = send(&app, "GET", &format!("/chat-history/{}", user_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["chats"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_chat_requires_thread_and_message() {
    let app = app();

    let (status, body) = send(&app, "POST", "/chat", Some(json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("thread_id is required"));

    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "thread_id": "1", "message": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_with_unknown_user_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "user_id": "ghost", "thread_id": "1", "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, messages) = send(&app, "GET", "/threads/1/messages", None).await;
    assert!(messages["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_into_new_thread_id_lists_it_for_the_user() {
    let app = app();
    let user_id = login(&app, "a@x.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "user_id": user_id, "thread_id": "t1", "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, "GET", &format!("/threads/{}", user_id), None).await;
    let threads = listed["threads"].as_array().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["id"], "t1");
    assert_eq!(threads[0]["name"], "Thread t1");

    let (_, history) = send(&app, "GET", &format!("/chat-history/{}", user_id), None).await;
    let chats = history["chats"].as_array().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0]["message"], "hi");
    assert_eq!(chats[0]["thread_id"], "t1");
}

#[tokio::test]
async fn test_chat_into_another_users_thread_is_not_found() {
    let app = app();
    let alice = login(&app, "a@x.com").await;
    let bob = login(&app, "b@x.com").await;
    send(&app, "POST", "/threads", Some(json!({ "user_id": alice }))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "user_id": bob, "thread_id": "1", "message": "from b" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, history) = send(&app, "GET", &format!("/chat-history/{}", alice), None).await;
    assert!(history["chats"].as_array().unwrap().is_empty());

    let (_, listed) = send(&app, "GET", &format!("/threads/{}", bob), None).await;
    assert!(listed["threads"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_on_deleted_thread_is_not_found() {
    let app = app();
    let user_id = login(&app, "a@x.com").await;
    send(&app, "POST", "/threads", Some(json!({ "user_id": user_id }))).await;
    send(&app, "DELETE", "/threads/1", None).await;

    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "thread_id": "1", "message": "still there?" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_strict_store_rejects_uncreated_thread() {
    let app = app_with(ResponderKind::Memory, false);
    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "thread_id": "42", "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_chat_reports_url_and_prompt() {
    let app = app_with(ResponderKind::Image, true);
    let (status, body) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "thread_id": "7", "message": "generate image of a forest path" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "image");
    assert_eq!(body["prompt"], "a forest path");
    assert!(body["image_url"].as_str().unwrap().starts_with("https://"));

    let (_, messages) = send(&app, "GET", "/threads/7/messages", None).await;
    assert_eq!(messages["messages"][0]["image_url"], body["image_url"]);
    assert_eq!(messages["messages"][0]["message"], "Generate image of a forest path");
}

#[tokio::test]
async fn test_chat_history_of_unknown_user_is_not_found() {
    let app = app();
    let (status, _) = send(&app, "GET", "/chat-history/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_docs() {
    let app = app_with(ResponderKind::Echo, true);

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["services"]["session_store"], "available");
    assert_eq!(health["services"]["responder"], "echo");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/chat"].is_object());
}

#[tokio::test]
async fn test_routes_are_served_under_api_prefix() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/login", Some(json!({ "email": "a@x.com" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "a_x_com");

    let (status, _) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[test]
fn test_api_error_status_codes() {
    let cases = [
        (ApiError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (
            ApiError::Persist(PersistError::ThreadNotFound("1".to_string())),
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::Persist(PersistError::Internal("poisoned".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Responder(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.into_response().status(), expected);
    }
}
