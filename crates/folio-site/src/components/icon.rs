//! Glyph rendering for content icons.

use dioxus::prelude::*;

use crate::content::Icon;

/// Renders an icon reference as its glyph.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "icon icon-{icon.css_name()} {class}",
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}
