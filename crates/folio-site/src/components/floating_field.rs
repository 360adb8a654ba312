//! Contact form input with a floating label.

use dioxus::prelude::*;
use folio_ui::use_theme;

use crate::state::{label_floats, Field};

/// Text input with a label that floats above it once focused or filled.
#[component]
pub fn FloatingField(
    field: Field,
    value: String,
    invalid: bool,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let mode = use_theme().mode();
    let mut focused = use_signal(|| false);
    let is_focused = *focused.read();

    let id = format!("contact-{}", field.key());
    let floating = label_floats(is_focused, &value);

    let mut wrapper = String::from("field");
    wrapper.push_str(mode.pick(" field-light", " field-dark"));
    if is_focused {
        wrapper.push_str(" field-focused");
    }
    if invalid {
        wrapper.push_str(" field-invalid");
    }
    let label_class = if floating { "field-label field-label-floating" } else { "field-label" };

    rsx! {
        div {
            class: wrapper,

            label {
                class: label_class,
                r#for: "{id}",
                "{field.label()}"
            }

            if field == Field::Message {
                textarea {
                    id: "{id}",
                    class: "field-control field-textarea",
                    name: field.key(),
                    rows: "5",
                    value: "{value}",
                    required: true,
                    disabled: disabled,
                    "aria-invalid": "{invalid}",
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| focused.set(false),
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "field-control",
                    name: field.key(),
                    r#type: field.input_type(),
                    value: "{value}",
                    required: true,
                    disabled: disabled,
                    "aria-invalid": "{invalid}",
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| focused.set(false),
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }

            if invalid {
                span { class: "field-error", "{field.label()} is required" }
            }
        }
    }
}
