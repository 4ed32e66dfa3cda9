use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Pages shown on each side of the current one.
const SIBLINGS: u32 = 1;

/// One entry in the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    /// Elided run of pages.
    Gap,
}

/// Clamp a one-based page into `[1, total]` (treating `total` 0 as 1).
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}

/// One-based page numbers to render: the first and last page, the current
/// page with `siblings` neighbours on each side, and gaps in between.
pub fn page_slots(current: u32, total: u32, siblings: u32) -> Vec<PageSlot> {
    let total = total.max(1);
    let current = clamp_page(current, total);
    let start = current.saturating_sub(siblings).max(1);
    let end = current.saturating_add(siblings).min(total);

    let mut slots = Vec::new();
    if start > 1 {
        slots.push(PageSlot::Page(1));
    }
    if start > 2 {
        slots.push(PageSlot::Gap);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end + 1 < total {
        slots.push(PageSlot::Gap);
    }
    if end < total {
        slots.push(PageSlot::Page(total));
    }
    slots
}

/// Page to emit when `target` is clicked while the URL says `page`.
///
/// The target is clamped into range, and compared against the unclamped
/// `page` so a stale out-of-range URL can still land on the last page.
pub fn page_to_select(page: u32, total: u32, target: u32) -> Option<u32> {
    let target = clamp_page(target, total);
    (target != page).then_some(target)
}

/// One-based page picker. `on_select` only ever receives a page in
/// `[1, total_pages]` that differs from `page`.
#[component]
pub fn Pagination(page: u32, total_pages: u32, on_select: EventHandler<u32>) -> Element {
    let total = total_pages.max(1);
    let current = clamp_page(page, total);
    let select = move |target: u32| {
        if let Some(target) = page_to_select(page, total, target) {
            on_select.call(target);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", aria_label: "pagination",
            Button {
                variant: ButtonVariant::Ghost,
                disabled: current <= 1,
                onclick: move |_| select(current.saturating_sub(1)),
                "‹"
            }
            for (i, slot) in page_slots(current, total, SIBLINGS).into_iter().enumerate() {
                match slot {
                    PageSlot::Page(p) => rsx! {
                        Button {
                            key: "page-{p}",
                            variant: if p == current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                            aria_current: if p == current { "page" } else { "false" },
                            onclick: move |_| select(p),
                            "{p}"
                        }
                    },
                    PageSlot::Gap => rsx! {
                        span { key: "gap-{i}", class: "pagination-gap", "…" }
                    },
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                disabled: current >= total,
                onclick: move |_| select(current + 1),
                "›"
            }
        }
    }
}
