use dioxus::prelude::*;

/// Surface container for dashboard sections and forms.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{class}", {children} }
    }
}

/// Header section of a Card. Holds the title/description block and,
/// optionally, a trailing [`CardAction`].
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Trailing action slot in a CardHeader, typically a button.
#[component]
pub fn CardAction(children: Element) -> Element {
    rsx! {
        div { class: "card-action", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
