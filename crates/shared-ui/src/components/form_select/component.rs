use dioxus::prelude::*;

/// Native `<select>` for the inline filter sentence on the results screen.
///
/// Renders one `<option>` per `(value, label)` pair so callers don't repeat
/// the option markup for every enum.
#[component]
pub fn FormSelect(
    /// Currently selected value.
    value: String,
    /// `(value, label)` pairs in display order.
    options: Vec<(String, String)>,
    /// Called with the newly selected value.
    on_change: EventHandler<String>,
    /// Accessible name, since the select has no visible label.
    #[props(default)]
    aria_label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            class: "form-select",
            aria_label: aria_label,
            disabled: disabled,
            onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    selected: option_value == value,
                    value: "{option_value}",
                    "{label}"
                }
            }
        }
    }
}
