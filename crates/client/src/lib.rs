pub mod api;
pub mod config;
pub mod error_convert;
pub mod fetch;
pub mod session;

pub use api::{SearchClient, INVALID_USER_MESSAGE};
pub use fetch::{FetchCycle, RequestToken, Settled};
pub use session::{
    check_gate, sign_in, GateDecision, MemorySessionStore, SessionStore, MISSING_FIELDS_MESSAGE,
};
