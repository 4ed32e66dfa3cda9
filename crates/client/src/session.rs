use shared_types::{AppError, LoginRequest, Session, SESSION_STORAGE_KEY};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::SearchClient;
use crate::error_convert::ValidateRequest;

/// Shown when either login field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both username and password.";

/// Key/value storage holding the serialized session under
/// [`SESSION_STORAGE_KEY`].
///
/// The browser implementation sits on `localStorage`; tests use
/// [`MemorySessionStore`].
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// Raw stored value for `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// The stored session; unreadable or missing records count as none.
    async fn load(&self) -> Option<Session> {
        match self.get_item(SESSION_STORAGE_KEY).await {
            Ok(raw) => Session::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read stored session");
                None
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        let json = serde_json::to_string(session)?;
        self.set_item(SESSION_STORAGE_KEY, &json).await
    }
}

/// In-process store with `localStorage` semantics. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Equal when both handles share the same contents.
impl PartialEq for MemorySessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl SessionStore for MemorySessionStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let items = self
            .items
            .lock()
            .map_err(|_| AppError::storage("session store poisoned"))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| AppError::storage("session store poisoned"))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of the entry check on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Enter(Session),
    /// No stored session: leave before any search is issued.
    Redirect,
}

/// Read the stored session once and decide whether the results screen may
/// open.
pub async fn check_gate<S: SessionStore>(store: &S) -> GateDecision {
    match store.load().await {
        Some(session) => GateDecision::Enter(session),
        None => {
            tracing::debug!("No stored session, redirecting to login");
            GateDecision::Redirect
        }
    }
}

/// Validate the form, resolve the username, and persist the session.
///
/// Nothing is stored unless the lookup succeeds.
pub async fn sign_in<S: SessionStore>(
    client: &SearchClient,
    store: &S,
    request: &LoginRequest,
) -> Result<Session, AppError> {
    request
        .validate_request()
        .map_err(|e| e.with_message(MISSING_FIELDS_MESSAGE))?;

    let session = client.lookup_user(&request.username).await?;
    store.save(&session).await?;
    tracing::info!(username = %session.username, karma = session.karma, "Signed in");
    Ok(session)
}
