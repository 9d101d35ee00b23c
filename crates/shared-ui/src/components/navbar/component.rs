use dioxus::prelude::*;

/// Fixed top navigation bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div { class: "navbar-inner", {children} }
        }
    }
}

/// Brand block: logo mark plus name/tagline stack.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Horizontal menu area, hidden on narrow viewports.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        div { class: "navbar-nav", {children} }
    }
}

/// Trailing action area (settings, logout, mobile trigger).
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "navbar-actions", {children} }
    }
}

/// Expanded mobile menu, rendered under the bar while open.
///
/// Whether it is open is the caller's state; this is layout only.
#[component]
pub fn NavbarFlyout(children: Element) -> Element {
    rsx! {
        div { class: "navbar-flyout", {children} }
    }
}
