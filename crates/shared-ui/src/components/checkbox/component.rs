use dioxus::prelude::*;

/// A themed native checkbox.
///
/// `on_change` receives the new checked state; the caller owns it.
#[component]
pub fn Checkbox(
    #[props(default = false)] checked: bool,
    #[props(default)] on_change: EventHandler<bool>,
    #[props(default)] id: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "checkbox",
            class: "checkbox",
            id: "{id}",
            checked: checked,
            disabled: disabled,
            onchange: move |evt: FormEvent| on_change.call(evt.value() == "true"),
        }
    }
}
