use crate::format_helpers::format_age;
use crate::routes::Route;
use crate::session::BrowserSessionStore;
use chrono::Utc;
use client::{check_gate, FetchCycle, GateDecision, SearchClient, SessionStore};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
use futures_util::StreamExt;
use shared_types::{
    ContentTag, FilterChange, FilterState, ResultItem, SearchRequest, Session, SortBy, TimeRange,
};
use shared_ui::{
    FormSelect, Input, PageActions, PageHeader, PageTitle, Pagination, SearchBar, Skeleton,
};

/// Skeleton rows shown before the first response arrives.
const SKELETON_ROWS: usize = 8;

/// Results route over the browser's stored session.
#[component]
pub fn Home(filters: FilterState) -> Element {
    rsx! {
        GatedResults {
            store: BrowserSessionStore,
            filters,
            on_redirect: move |_| {
                navigator().replace(Route::Login {});
            },
        }
    }
}

/// Reads the stored session once per mount. Without one it calls
/// `on_redirect` and renders nothing; the search screen, the only place
/// that fetches, mounts only after a session was found.
#[component]
fn GatedResults<S: SessionStore + Clone + PartialEq + 'static>(
    store: S,
    filters: FilterState,
    on_redirect: EventHandler<()>,
) -> Element {
    let gate = use_resource(move || {
        let store = store.clone();
        async move { check_gate(&store).await }
    });

    use_effect(move || {
        if let Some(GateDecision::Redirect) = &*gate.read() {
            on_redirect.call(());
        }
    });

    let decision = gate.read().clone();
    match decision {
        Some(GateDecision::Enter(session)) => rsx! {
            SearchScreen { session, filters }
        },
        Some(GateDecision::Redirect) => rsx! {},
        None => rsx! {
            div { class: "gate-loading", "Loading..." }
        },
    }
}

/// Value/label pairs for a [`FormSelect`].
fn select_options<T: Copy>(
    all: &[T],
    value: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|item| (value(item).to_string(), label(item).to_string()))
        .collect()
}

#[component]
fn SearchScreen(session: Session, filters: FilterState) -> Element {
    let client = use_context::<SearchClient>();
    let item_base_url = client.config().item_base_url.clone();
    let mut cycle = use_signal(FetchCycle::new);
    let mut draft = use_signal(|| filters.query.clone());

    // Subscribed once; every published FilterState becomes one request.
    let fetcher = use_coroutine(move |mut rx: UnboundedReceiver<FilterState>| {
        let client = client.clone();
        async move {
            while let Some(filters) = rx.next().await {
                let request = SearchRequest::from_filters_now(&filters);
                let token = cycle.write().begin();
                tracing::debug!(?request, "Issuing search");
                let client = client.clone();
                spawn(async move {
                    let outcome = client.search(&request).await;
                    cycle.write().settle(token, outcome);
                });
            }
        }
    });

    // Keyed on the filter value, so re-renders with the same URL never fetch.
    use_effect(use_reactive((&filters,), move |(filters,)| {
        draft.set(filters.query.clone());
        fetcher.send(filters);
    }));

    let current = filters.clone();
    let apply = use_callback(move |change: FilterChange| {
        navigator().push(Route::Home {
            filters: current.apply_change(change),
        });
    });

    let submit_query = move |evt: FormEvent| {
        evt.prevent_default();
        apply.call(FilterChange::Query(draft()));
    };

    let username = session.username.clone();
    let karma = session.karma;

    let (items, total_pages, show_skeleton, failed) = {
        let cycle = cycle.read();
        (
            cycle.items().to_vec(),
            cycle.total_pages(),
            cycle.is_loading() && !cycle.has_loaded(),
            cycle.last_error().is_some(),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            PageHeader {
                PageTitle { "Hello, {username}!" }
                form { class: "home-search", onsubmit: submit_query,
                    Input {
                        aria_label: "Search",
                        placeholder: "Search stories by title, url or author",
                        value: draft(),
                        on_input: move |evt: FormEvent| draft.set(evt.value()),
                        adornment: rsx! {
                            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        },
                    }
                }
                PageActions {
                    span { class: "home-karma", "karma {karma}" }
                }
            }

            main { class: "home-main",
                SearchBar {
                    span { "Search" }
                    FormSelect {
                        aria_label: "Content type",
                        value: filters.tag.as_str().to_string(),
                        options: select_options(&ContentTag::ALL, ContentTag::as_str, ContentTag::label),
                        on_change: move |value: String| {
                            apply.call(FilterChange::Tag(ContentTag::from_str_or_default(&value)))
                        },
                    }
                    span { "by" }
                    FormSelect {
                        aria_label: "Sort order",
                        value: filters.sort_by.as_str().to_string(),
                        options: select_options(&SortBy::ALL, SortBy::as_str, SortBy::label),
                        on_change: move |value: String| {
                            apply.call(FilterChange::SortBy(SortBy::from_str_or_default(&value)))
                        },
                    }
                    span { "for" }
                    FormSelect {
                        aria_label: "Time range",
                        value: filters.time_range.as_str().to_string(),
                        options: select_options(&TimeRange::ALL, TimeRange::as_str, TimeRange::label),
                        on_change: move |value: String| {
                            apply.call(FilterChange::TimeRange(TimeRange::from_str_or_default(&value)))
                        },
                    }
                }

                if failed {
                    div { class: "home-notice", role: "status",
                        "Couldn't refresh results. Showing the previous ones."
                    }
                }

                section { class: "home-results",
                    if show_skeleton {
                        for i in 0..SKELETON_ROWS {
                            Skeleton { key: "skeleton-{i}", class: "result-skeleton" }
                        }
                    } else if items.is_empty() {
                        div { class: "home-empty", "No results found" }
                    } else {
                        for item in items {
                            ResultRow {
                                key: "{item.id}",
                                item: item.clone(),
                                item_base_url: item_base_url.clone(),
                            }
                        }
                    }
                }

                Pagination {
                    page: filters.display_page(),
                    total_pages,
                    on_select: move |page: u32| apply.call(FilterChange::Page(page.saturating_sub(1))),
                }
            }
        }
    }
}

/// One hit: linked title, external URL, and the metadata line.
#[component]
fn ResultRow(item: ResultItem, item_base_url: String) -> Element {
    let link = item.item_link(&item_base_url);
    let title = item.display_title().to_string();
    let author = item.display_author().to_string();
    let external = item.external_url().map(str::to_string);
    let points = item.points;
    let comments = item.num_comments;
    let age = item
        .created_at
        .as_deref()
        .map(|created| format_age(created, Utc::now()));

    rsx! {
        article { class: "result-row",
            div { class: "result-title",
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{title}"
                }
                if let Some(url) = external {
                    a {
                        class: "result-url",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "({url})"
                    }
                }
            }
            div { class: "result-meta",
                "{points} points | {author} | {comments} comments"
                if let Some(age) = age {
                    " | {age}"
                }
            }
        }
    }
}
