use dioxus::prelude::*;

/// A themed native select element.
///
/// Children are `option { value: "...", "Label" }` elements. A native
/// `<select>` keeps keyboard and mobile behavior for free; form fields
/// here never need a popover-backed listbox.
#[component]
pub fn Select(
    #[props(default)] value: String,
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] id: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            class: "select",
            id: "{id}",
            value: value,
            required: required,
            disabled: disabled,
            onchange: move |evt| on_change.call(evt),
            {children}
        }
    }
}
