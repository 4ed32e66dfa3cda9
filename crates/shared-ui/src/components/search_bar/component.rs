use dioxus::prelude::*;

/// Filter row: inline words and selects read as one sentence
/// ("Search [Story] by [Popularity] for [All Time]").
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}
