use crate::common::MockApi;
use axum::http::StatusCode;
use client::{check_gate, sign_in, GateDecision, MemorySessionStore, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, Session, SESSION_STORAGE_KEY};

#[tokio::test]
async fn test_missing_session_redirects() {
    let store = MemorySessionStore::new();
    assert_eq!(check_gate(&store).await, GateDecision::Redirect);
}

#[tokio::test]
async fn test_corrupt_session_redirects() {
    let store = MemorySessionStore::new();
    store
        .set_item(SESSION_STORAGE_KEY, r#"{"user":"pg"}"#)
        .await
        .unwrap();

    assert_eq!(check_gate(&store).await, GateDecision::Redirect);
}

#[tokio::test]
async fn test_failed_login_keeps_gate_closed() {
    let api = MockApi::start().await;
    let store = MemorySessionStore::new();

    let _ = sign_in(&api.client(), &store, &LoginRequest::new("nobody", "pw")).await;

    assert_eq!(check_gate(&store).await, GateDecision::Redirect);
    assert!(api.search_requests().is_empty());
}

#[tokio::test]
async fn test_signed_in_user_passes_gate() {
    let api = MockApi::start().await;
    api.add_user("dang", StatusCode::OK, serde_json::json!({ "username": "dang", "karma": 9 }));
    let store = MemorySessionStore::new();
    sign_in(&api.client(), &store, &LoginRequest::new("dang", "pw"))
        .await
        .unwrap();

    assert_eq!(
        check_gate(&store).await,
        GateDecision::Enter(Session {
            username: "dang".to_string(),
            karma: 9,
        })
    );
}
