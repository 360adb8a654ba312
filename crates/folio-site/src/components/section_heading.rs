//! Heading block shared by the content sections.

use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Motion, Pose, Transition};

use crate::state::muted_class;

const EYEBROW: Motion = Motion::fade_up(20.0, Transition::new(0.6));
const TITLE: Motion = Motion::fade_up(30.0, Transition::new(0.7).delay(0.1));
const RULE: Motion = Motion::new(Pose::REST.scale_x(0.0), Transition::new(0.6).delay(0.3));
const SUBTITLE: Motion = Motion::fade(Transition::new(0.7).delay(0.4));

/// Eyebrow, two-tone title, accent rule and optional subtitle, revealed
/// together once the block scrolls in.
#[component]
pub fn SectionHeading(
    title: String,
    accent: String,
    #[props(default)] eyebrow: String,
    #[props(default)] subtitle: String,
) -> Element {
    let mode = use_theme().mode();
    let view = use_in_view(-80);
    let seen = view.seen();
    let muted = muted_class(mode);

    rsx! {
        div {
            id: "{view.id}",
            class: "section-heading",

            if !eyebrow.is_empty() {
                p {
                    class: "section-eyebrow {muted}",
                    style: EYEBROW.css(seen),
                    "{eyebrow}"
                }
            }

            h2 {
                class: "section-title",
                style: TITLE.css(seen),
                "{title} "
                span { class: "accent", "{accent}" }
            }

            div {
                class: "section-rule",
                style: RULE.css(seen),
            }

            if !subtitle.is_empty() {
                p {
                    class: "section-subtitle {muted}",
                    style: SUBTITLE.css(seen),
                    "{subtitle}"
                }
            }
        }
    }
}
