pub mod config;
pub mod error;
pub mod filter;
pub mod search;
pub mod session;
pub mod time_window;

pub use config::*;
pub use error::*;
pub use filter::*;
pub use search::*;
pub use session::*;
pub use time_window::*;
