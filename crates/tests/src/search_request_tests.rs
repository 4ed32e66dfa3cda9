use crate::common::{parse_numeric_filter, MockApi};
use pretty_assertions::assert_eq;
use shared_types::{now_unix, FilterChange, FilterState, SearchRequest, SortBy, TimeRange};

#[tokio::test]
async fn test_initial_load_request() {
    let api = MockApi::start().await;
    let filters = FilterState::from_query("");

    api.client()
        .search(&SearchRequest::from_filters_now(&filters))
        .await
        .unwrap();

    let requests = api.search_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.endpoint, "search");
    assert_eq!(request.params.get("query").map(String::as_str), Some(""));
    assert_eq!(request.params.get("tags").map(String::as_str), Some("story"));
    assert_eq!(request.params.get("page").map(String::as_str), Some("0"));
    assert!(!request.params.contains_key("numericFilters"));
}

#[tokio::test]
async fn test_past_week_from_page_three() {
    let api = MockApi::start().await;
    let filters = FilterState::from_query("query=rust&tags=story&page=3&timeRange=all&sortBy=popularity");
    assert_eq!(filters.page, 3);

    let next = filters.apply_change(FilterChange::TimeRange(TimeRange::PastWeek));
    assert_eq!(next.page, 0);
    assert_eq!(next.query, "rust");

    let before = now_unix();
    api.client()
        .search(&SearchRequest::from_filters_now(&next))
        .await
        .unwrap();
    let after = now_unix();

    let requests = api.search_requests();
    assert_eq!(requests.len(), 1);
    let params = &requests[0].params;
    assert_eq!(params.get("page").map(String::as_str), Some("0"));
    assert_eq!(params.get("query").map(String::as_str), Some("rust"));

    let bound = params
        .get("numericFilters")
        .and_then(|f| parse_numeric_filter(f))
        .expect("numericFilters missing or malformed");
    assert!(bound >= before - 604_800 && bound <= after - 604_800);
}

#[tokio::test]
async fn test_date_sort_uses_date_endpoint() {
    let api = MockApi::start().await;
    let filters = FilterState::default().apply_change(FilterChange::SortBy(SortBy::Date));

    api.client()
        .search(&SearchRequest::from_filters_now(&filters))
        .await
        .unwrap();

    let requests = api.search_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "search_by_date");
}

#[tokio::test]
async fn test_query_text_arrives_decoded() {
    let api = MockApi::start().await;
    let filters = FilterState::from_query("query=async+rust%20%26%20tokio&tags=comment&page=2");

    api.client()
        .search(&SearchRequest::from_filters_now(&filters))
        .await
        .unwrap();

    let params = &api.search_requests()[0].params;
    assert_eq!(params.get("query").map(String::as_str), Some("async rust & tokio"));
    assert_eq!(params.get("tags").map(String::as_str), Some("comment"));
    assert_eq!(params.get("page").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn test_last_24h_window() {
    let api = MockApi::start().await;
    let filters = FilterState::default().apply_change(FilterChange::TimeRange(TimeRange::Last24h));

    let before = now_unix();
    api.client()
        .search(&SearchRequest::from_filters_now(&filters))
        .await
        .unwrap();
    let after = now_unix();

    let filter = api.search_requests()[0]
        .params
        .get("numericFilters")
        .cloned()
        .unwrap();
    assert!(filter.starts_with("created_at_i>"));
    let bound = parse_numeric_filter(&filter).unwrap();
    assert!(bound >= before - 86_400 && bound <= after - 86_400);
}
