use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use client::SearchClient;
use serde_json::Value;
use shared_types::{ClientConfig, CREATED_AT_FIELD};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request received by the mock API.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `search`, `search_by_date` or `users`.
    pub endpoint: String,
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CannedReply {
    status: StatusCode,
    body: String,
}

impl CannedReply {
    fn json(status: StatusCode, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    search_reply: Arc<Mutex<CannedReply>>,
    users: Arc<Mutex<HashMap<String, CannedReply>>>,
}

impl MockState {
    fn record(&self, endpoint: &str, params: HashMap<String, String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            params,
        });
    }
}

/// In-process stand-in for the public search and user APIs.
///
/// Serves whatever reply was last configured and records every request so
/// tests can assert on exactly what the client sent.
pub struct MockApi {
    state: MockState,
    pub base_url: String,
}

impl MockApi {
    /// Bind on an ephemeral port and serve in the background. The default
    /// search reply is an empty single page; every user lookup is a 404
    /// until [`MockApi::add_user`] registers one.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            search_reply: Arc::new(Mutex::new(CannedReply::json(
                StatusCode::OK,
                &serde_json::json!({ "hits": [], "nbPages": 1 }),
            ))),
            users: Arc::new(Mutex::new(HashMap::new())),
        };

        let app = Router::new()
            .route("/api/v1/search", get(search))
            .route("/api/v1/search_by_date", get(search_by_date))
            .route("/api/v1/users/{username}", get(user))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("Mock API has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock API stopped");
        });

        Self {
            state,
            base_url: format!("http://{addr}/api/v1"),
        }
    }

    /// Client pointed at this mock.
    pub fn client(&self) -> SearchClient {
        SearchClient::new(ClientConfig {
            api_base_url: self.base_url.clone(),
            ..ClientConfig::default()
        })
    }

    pub fn set_search_reply(&self, status: StatusCode, body: Value) {
        *self.state.search_reply.lock().unwrap() = CannedReply::json(status, &body);
    }

    /// Reply with a body that is not necessarily valid JSON.
    pub fn set_search_raw(&self, status: StatusCode, body: &str) {
        *self.state.search_reply.lock().unwrap() = CannedReply {
            status,
            body: body.to_string(),
        };
    }

    pub fn add_user(&self, username: &str, status: StatusCode, body: Value) {
        self.state
            .users
            .lock()
            .unwrap()
            .insert(username.to_string(), CannedReply::json(status, &body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests to either search endpoint.
    pub fn search_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.endpoint != "users")
            .collect()
    }
}

async fn search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.record("search", params);
    state.search_reply.lock().unwrap().clone().into_response()
}

async fn search_by_date(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.record("search_by_date", params);
    state.search_reply.lock().unwrap().clone().into_response()
}

async fn user(State(state): State<MockState>, Path(username): Path<String>) -> Response {
    state.record(
        "users",
        HashMap::from([("username".to_string(), username.clone())]),
    );
    let reply = state.users.lock().unwrap().get(&username).cloned();
    match reply {
        Some(reply) => reply.into_response(),
        None => CannedReply::json(
            StatusCode::NOT_FOUND,
            &serde_json::json!({ "status": 404, "error": "Not Found" }),
        )
        .into_response(),
    }
}

/// A search hit in the wire format.
pub fn hit(id: &str, title: &str) -> Value {
    serde_json::json!({
        "objectID": id,
        "title": title,
        "url": format!("https://example.com/{id}"),
        "points": 42,
        "author": "pg",
        "num_comments": 7,
        "created_at": "2026-01-20T21:35:00.000Z",
    })
}

/// Bound out of a `created_at_i>N` expression.
pub fn parse_numeric_filter(expr: &str) -> Option<i64> {
    expr.strip_prefix(CREATED_AT_FIELD)?
        .strip_prefix('>')?
        .parse()
        .ok()
}
