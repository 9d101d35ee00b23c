use dioxus::prelude::*;

/// Thin divider line.
#[component]
pub fn Separator(#[props(default = true)] horizontal: bool) -> Element {
    let orientation = if horizontal { "horizontal" } else { "vertical" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "separator",
            role: "separator",
            "data-orientation": orientation,
        }
    }
}
