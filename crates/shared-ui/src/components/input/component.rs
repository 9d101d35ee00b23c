use dioxus::prelude::*;

/// A themed text input.
///
/// `required` maps straight onto the native attribute; empty-field
/// validation stays with the browser.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            class: "input",
            id: "{id}",
            value: value,
            placeholder: placeholder,
            required: required,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
        }
    }
}
