pub mod home;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::FilterState;

use home::Home;
use login::Login;
use not_found::NotFound;

/// Application routes.
///
/// The results screen keeps its whole filter state in the query string, so
/// reloading or sharing a URL reproduces the same search.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/home?:..filters")]
    Home { filters: FilterState },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
