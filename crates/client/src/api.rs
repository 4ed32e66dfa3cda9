use shared_types::{AppError, ClientConfig, SearchRequest, SearchResponse, Session, UserProfile};

use crate::error_convert::ReqwestErrorExt;

/// Shown when a username cannot be resolved to a profile.
pub const INVALID_USER_MESSAGE: &str = "Invalid username or user does not exist.";

/// HTTP client for the public search and user-lookup endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// Run one search. Non-success statuses, transport failures and
    /// undecodable bodies are all errors; absent `hits` / `nbPages` are not.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AppError> {
        let response = self
            .http
            .get(self.endpoint(request.endpoint()))
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_status(status.as_u16(), "search"));
        }

        let body = response.text().await.map_err(|e| e.into_app_error())?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            hits = parsed.items.len(),
            total_pages = parsed.total_pages,
            "Search response received"
        );
        Ok(parsed)
    }

    /// Resolve a username to a session.
    ///
    /// Any non-success status, undecodable body, or profile without a
    /// `username` counts as invalid credentials. Transport failures stay
    /// `Network` errors so the UI can tell them apart.
    #[tracing::instrument(skip(self))]
    pub async fn lookup_user(&self, username: &str) -> Result<Session, AppError> {
        let url = self.endpoint(&format!("users/{}", urlencoding::encode(username)));
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), "User lookup rejected");
            return Err(AppError::invalid_credentials(INVALID_USER_MESSAGE));
        }

        let body = response.text().await.map_err(|e| e.into_app_error())?;
        let profile: UserProfile = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, "User lookup body unreadable");
            AppError::invalid_credentials(INVALID_USER_MESSAGE)
        })?;

        profile
            .into_session(username)
            .ok_or_else(|| AppError::invalid_credentials(INVALID_USER_MESSAGE))
    }
}
