use dioxus::prelude::*;

/// Blocking modal dialog.
///
/// Rendered only while `open` is true. The single action button fires
/// `on_dismiss`; clearing the state that drives `open` is the caller's
/// job. There is no backdrop-click dismissal; the dialog must be
/// acknowledged.
#[component]
pub fn AlertDialog(
    open: bool,
    title: String,
    message: String,
    #[props(default = "Got it".to_string())] action_label: String,
    #[props(default)] on_dismiss: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert-dialog-overlay",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                aria_modal: "true",
                h2 { class: "alert-dialog-title", "{title}" }
                p { class: "alert-dialog-message", "{message}" }
                div { class: "alert-dialog-actions",
                    button {
                        r#type: "button",
                        class: "alert-dialog-action",
                        onclick: move |_| on_dismiss.call(()),
                        "{action_label}"
                    }
                }
            }
        }
    }
}
