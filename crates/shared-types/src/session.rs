use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Local-storage key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "user";

/// The signed-in display name, persisted locally at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub karma: i64,
}

impl Session {
    /// Parse a stored record; anything unreadable counts as no session.
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|json| serde_json::from_str(json).ok())
    }
}

/// Body of the user-lookup endpoint. Only the fields the gate needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub karma: Option<i64>,
}

impl UserProfile {
    /// Build the session for `requested`, or `None` when the profile has no
    /// username (treated as invalid credentials).
    pub fn into_session(self, requested: &str) -> Option<Session> {
        self.username.filter(|u| !u.is_empty())?;
        Some(Session {
            username: requested.to_string(),
            karma: self.karma.unwrap_or(0),
        })
    }
}

/// Login form submission. The password is required but never verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

impl LoginRequest {
    /// Build a request from raw form input, trimming the username.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}
