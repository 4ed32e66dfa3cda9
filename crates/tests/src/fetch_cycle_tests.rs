use crate::common::{hit, MockApi};
use axum::http::StatusCode;
use client::{FetchCycle, Settled};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, FilterState, SearchRequest};

fn ids(cycle: &FetchCycle) -> Vec<String> {
    cycle.items().iter().map(|i| i.id.clone()).collect()
}

async fn fetch_into(api: &MockApi, cycle: &mut FetchCycle) -> Settled {
    let token = cycle.begin();
    let outcome = api
        .client()
        .search(&SearchRequest::from_filters_now(&FilterState::default()))
        .await;
    cycle.settle(token, outcome)
}

#[tokio::test]
async fn test_success_replaces_results() {
    let api = MockApi::start().await;
    api.set_search_reply(
        StatusCode::OK,
        serde_json::json!({ "hits": [hit("1", "one"), hit("2", "two")], "nbPages": 12 }),
    );
    let mut cycle = FetchCycle::new();

    assert_eq!(fetch_into(&api, &mut cycle).await, Settled::Replaced);
    assert_eq!(ids(&cycle), vec!["1", "2"]);
    assert_eq!(cycle.total_pages(), 12);
    assert_eq!(cycle.items()[0].points, 42);
    assert_eq!(cycle.items()[0].display_author(), "pg");
}

#[tokio::test]
async fn test_absent_nb_pages_defaults_to_one() {
    let api = MockApi::start().await;
    api.set_search_reply(StatusCode::OK, serde_json::json!({ "hits": [hit("1", "one")] }));
    let mut cycle = FetchCycle::new();

    fetch_into(&api, &mut cycle).await;
    assert_eq!(ids(&cycle), vec!["1"]);
    assert_eq!(cycle.total_pages(), 1);
}

#[tokio::test]
async fn test_absent_hits_is_empty() {
    let api = MockApi::start().await;
    api.set_search_reply(StatusCode::OK, serde_json::json!({ "nbPages": 3 }));
    let mut cycle = FetchCycle::new();

    assert_eq!(fetch_into(&api, &mut cycle).await, Settled::Replaced);
    assert!(cycle.items().is_empty());
    assert_eq!(cycle.total_pages(), 3);
}

#[tokio::test]
async fn test_sparse_hit_uses_fallbacks() {
    let api = MockApi::start().await;
    api.set_search_reply(
        StatusCode::OK,
        serde_json::json!({ "hits": [{ "objectID": "9", "points": null }], "nbPages": 1 }),
    );
    let mut cycle = FetchCycle::new();

    fetch_into(&api, &mut cycle).await;
    let item = &cycle.items()[0];
    assert_eq!(item.display_title(), "No Title Available");
    assert_eq!(item.display_author(), "Unknown");
    assert_eq!(item.points, 0);
    assert_eq!(item.num_comments, 0);
}

#[tokio::test]
async fn test_server_error_keeps_previous_results() {
    let api = MockApi::start().await;
    api.set_search_reply(
        StatusCode::OK,
        serde_json::json!({ "hits": [hit("1", "one")], "nbPages": 4 }),
    );
    let mut cycle = FetchCycle::new();
    fetch_into(&api, &mut cycle).await;

    api.set_search_reply(StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({}));
    assert_eq!(fetch_into(&api, &mut cycle).await, Settled::Retained);
    assert_eq!(ids(&cycle), vec!["1"]);
    assert_eq!(cycle.total_pages(), 4);
    assert_eq!(cycle.last_error().map(|e| e.kind), Some(AppErrorKind::Upstream));
}

#[tokio::test]
async fn test_malformed_body_keeps_previous_results() {
    let api = MockApi::start().await;
    api.set_search_reply(
        StatusCode::OK,
        serde_json::json!({ "hits": [hit("1", "one")], "nbPages": 2 }),
    );
    let mut cycle = FetchCycle::new();
    fetch_into(&api, &mut cycle).await;

    api.set_search_raw(StatusCode::OK, "<html>not json</html>");
    assert_eq!(fetch_into(&api, &mut cycle).await, Settled::Retained);
    assert_eq!(ids(&cycle), vec!["1"]);
    assert_eq!(cycle.total_pages(), 2);
    assert_eq!(cycle.last_error().map(|e| e.kind), Some(AppErrorKind::Decode));
}

#[tokio::test]
async fn test_response_for_superseded_filters_is_dropped() {
    let api = MockApi::start().await;
    let client = api.client();
    let mut cycle = FetchCycle::new();

    api.set_search_reply(StatusCode::OK, serde_json::json!({ "hits": [hit("old", "old")] }));
    let old_token = cycle.begin();
    let old = client
        .search(&SearchRequest::from_filters_now(&FilterState::default()))
        .await;

    api.set_search_reply(StatusCode::OK, serde_json::json!({ "hits": [hit("new", "new")] }));
    let new_token = cycle.begin();
    let new = client
        .search(&SearchRequest::from_filters_now(&FilterState::default()))
        .await;

    // The newer response lands first; the older one arrives late.
    assert_eq!(cycle.settle(new_token, new), Settled::Replaced);
    assert_eq!(cycle.settle(old_token, old), Settled::Stale);
    assert_eq!(ids(&cycle), vec!["new"]);
}
