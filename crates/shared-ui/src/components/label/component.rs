use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form field label; pair with `html_for` pointing at the input id.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
