//! Landing banner.

use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Easing, LoopAnimation, Motion, Stagger, Transition};

use crate::content::{HERO, HERO_STATS, TECH_STACK};
use crate::state::{muted_class, SectionId};

const LINE: Motion = Motion::fade_up(30.0, Transition::new(0.7).easing(Easing::EXPO_OUT));
const LINES: Stagger = Stagger::new(0.1, 0.1);
const CHIP: Motion = Motion::fade_up(10.0, Transition::new(0.4));
const CHIPS: Stagger = Stagger::new(0.6, 0.04);
const STATS: Motion = Motion::fade_up(20.0, Transition::new(0.7).delay(0.9));
const SCROLL_HINT: LoopAnimation = LoopAnimation::new("folio-blink", 2.0).easing(Easing::EaseInOut);

/// Hero section: introduction, calls to action, stack and stats.
#[component]
pub fn HeroSection() -> Element {
    let mode = use_theme().mode();
    let view = use_in_view(0);
    let seen = view.seen();
    let muted = muted_class(mode);

    let line = |index: usize| LINES.apply(LINE, index).css(seen);

    rsx! {
        section {
            id: SectionId::Hero.anchor(),
            class: SectionId::Hero.surface_class(mode),

            div {
                id: "{view.id}",
                class: "hero-inner",

                p { class: "hero-greeting {muted}", style: line(0), "{HERO.greeting}" }
                h1 { class: "hero-name", style: line(1), "{HERO.name}" }
                p { class: "hero-role accent", style: line(2), "{HERO.role}" }
                p { class: "hero-intro {muted}", style: line(3), "{HERO.intro}" }

                div {
                    class: "hero-actions",
                    style: line(4),
                    a {
                        class: "btn btn-primary",
                        href: SectionId::Work.href(),
                        "View My Work"
                    }
                    a {
                        class: mode.pick("btn btn-outline btn-outline-light", "btn btn-outline btn-outline-dark"),
                        href: SectionId::Contact.href(),
                        "Get in Touch"
                    }
                }

                div {
                    class: "hero-stack",
                    for (i, tech) in TECH_STACK.iter().enumerate() {
                        span {
                            key: "{tech}",
                            class: mode.pick("chip chip-light", "chip chip-dark"),
                            style: CHIPS.apply(CHIP, i).css(seen),
                            "{tech}"
                        }
                    }
                }

                div {
                    class: "hero-stats",
                    style: STATS.css(seen),
                    for stat in HERO_STATS {
                        div {
                            key: "{stat.label}",
                            class: "hero-stat",
                            span { class: "hero-stat-value accent", "{stat.value}" }
                            span { class: "hero-stat-label {muted}", "{stat.label}" }
                        }
                    }
                }
            }

            a {
                class: "hero-scroll-hint {muted}",
                href: SectionId::Skills.href(),
                style: SCROLL_HINT.css(),
                "↓"
            }
        }
    }
}
