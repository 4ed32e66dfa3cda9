use client::SearchClient;
use dioxus::prelude::*;

mod format_helpers;
mod routes;
mod session;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Runs after the launcher installed the tracing subscriber, so config
    // diagnostics are logged.
    let config = use_hook(client::config::load_config);

    use_context_provider(|| SearchClient::new(config.clone()));

    rsx! {
        document::Title { "HN Search" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
