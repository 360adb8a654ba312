//! Biography, stats, passions and the career timeline.

use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Easing, Motion, Pose, Transition};

use crate::content::{ABOUT_BIO, ABOUT_ORBS, ABOUT_STATS, PASSIONS, TIMELINE};
use crate::state::{card_class, muted_class, strong_class, SectionId};

use super::{IconGlyph, SectionHeading};

const BIO: Motion = Motion::fade_up(30.0, Transition::new(0.7).easing(Easing::EXPO_OUT));
const STATS: Motion = Motion::fade_up(30.0, Transition::new(0.7).delay(0.5));
const PASSION: Motion = Motion::fade_up(20.0, Transition::new(0.6).delay(0.6));
const TIMELINE_LINE: Motion = Motion::new(
    Pose::REST.scale_y(0.0),
    Transition::new(1.2).delay(0.2),
);
const TIMELINE_ITEM: Motion =
    Motion::fade_x(-30.0, Transition::new(0.65).easing(Easing::EXPO_OUT));
const TIMELINE_DOT: Motion = Motion::new(Pose::REST.scale(0.0), Transition::new(0.4));

const DOT_GRID: usize = 10;
const DOT_SPACING: usize = 20;

/// About section.
#[component]
pub fn AboutSection() -> Element {
    let mode = use_theme().mode();
    let view = use_in_view(-60);
    let seen = view.seen();

    let muted = muted_class(mode);
    let strong = strong_class(mode);
    let card = card_class(mode);
    let dot_fill = mode.pick("var(--blue-500)", "var(--blue-400)");
    let grid_extent = DOT_GRID * DOT_SPACING;

    rsx! {
        section {
            id: SectionId::About.anchor(),
            class: SectionId::About.surface_class(mode),

            for (i, orb) in ABOUT_ORBS.iter().enumerate() {
                div {
                    key: "{i}",
                    class: orb.hue.orb_class(mode),
                    style: format!(
                        "width: {0}px; height: {0}px; {1} {2}",
                        orb.size_px,
                        orb.placement.css(),
                        orb.animation.map(|a| a.css()).unwrap_or_default()
                    ),
                }
            }

            svg {
                class: "about-dots",
                width: "{grid_extent}",
                height: "{grid_extent}",
                "aria-hidden": "true",
                for row in 0..DOT_GRID {
                    for col in 0..DOT_GRID {
                        circle {
                            key: "{row}-{col}",
                            cx: "{col * DOT_SPACING + DOT_SPACING / 2}",
                            cy: "{row * DOT_SPACING + DOT_SPACING / 2}",
                            r: "1.5",
                            fill: dot_fill,
                        }
                    }
                }
            }

            div {
                class: "section-inner",

                SectionHeading {
                    eyebrow: "Who I Am".to_string(),
                    title: "About".to_string(),
                    accent: "Me".to_string(),
                }

                div {
                    id: "{view.id}",
                    class: "about-layout",

                    div {
                        class: "about-story",
                        for (i, paragraph) in ABOUT_BIO.iter().enumerate() {
                            p {
                                key: "{i}",
                                class: "about-bio {muted}",
                                style: BIO.delayed(i as f32 * 0.1).css(seen),
                                "{paragraph}"
                            }
                        }

                        div {
                            class: "about-stats",
                            style: STATS.css(seen),
                            for stat in ABOUT_STATS {
                                div {
                                    key: "{stat.label}",
                                    class: "about-stat {card}",
                                    span { class: "about-stat-value accent", "{stat.value}" }
                                    span { class: "about-stat-label {muted}", "{stat.label}" }
                                }
                            }
                        }

                        div {
                            class: "about-passions",
                            style: PASSION.css(seen),
                            for passion in PASSIONS {
                                div {
                                    key: "{passion.title}",
                                    class: "about-passion",
                                    IconGlyph {
                                        icon: passion.icon,
                                        class: "about-passion-icon".to_string(),
                                    }
                                    div {
                                        h4 { class: strong, "{passion.title}" }
                                        p { class: muted, "{passion.description}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "timeline",
                        div {
                            class: "timeline-line",
                            style: TIMELINE_LINE.css(seen),
                        }
                        for (i, step) in TIMELINE.iter().enumerate() {
                            div {
                                key: "{step.year}",
                                class: "timeline-item",
                                style: TIMELINE_ITEM.delayed(i as f32 * 0.12).css(seen),
                                span {
                                    class: "timeline-dot",
                                    style: TIMELINE_DOT.delayed(0.3 + i as f32 * 0.12).css(seen),
                                }
                                div {
                                    class: "timeline-card {card}",
                                    span { class: "timeline-year accent", "{step.year}" }
                                    h4 { class: "timeline-title {strong}", "{step.title}" }
                                    p { class: "timeline-description {muted}", "{step.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
