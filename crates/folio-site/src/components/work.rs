//! Project grid with pointer-tilted cards.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Easing, Motion, Stagger, Transition};

use crate::content::{Icon, Project, PROJECTS, WORK_ORBS};
use crate::state::{card_class, muted_class, strong_class, CardHover, CardRect, SectionId};

use super::{IconGlyph, SectionHeading};

const CARD: Motion = Motion::fade_up(60.0, Transition::new(0.7).easing(Easing::EXPO_OUT));
const CARDS: Stagger = Stagger::new(0.1, 0.12);

/// Work section.
#[component]
pub fn WorkSection() -> Element {
    let mode = use_theme().mode();
    let grid = use_in_view(-60);
    let seen = grid.seen();

    rsx! {
        section {
            id: SectionId::Work.anchor(),
            class: SectionId::Work.surface_class(mode),

            for (i, orb) in WORK_ORBS.iter().enumerate() {
                div {
                    key: "{i}",
                    class: orb.hue.orb_class(mode),
                    style: format!(
                        "width: {0}px; height: {0}px; {1}",
                        orb.size_px,
                        orb.placement.css()
                    ),
                }
            }

            div {
                class: "section-inner",

                SectionHeading {
                    eyebrow: "Portfolio".to_string(),
                    title: "Selected".to_string(),
                    accent: "Work".to_string(),
                    subtitle: "A selection of projects I've built, from full-stack applications to interactive experiences.".to_string(),
                }

                div {
                    id: "{grid.id}",
                    class: "work-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        div {
                            key: "{project.title}",
                            class: "work-card-motion",
                            style: CARDS.apply(CARD, i).css(seen),
                            TiltCard { project: *project }
                        }
                    }
                }
            }
        }
    }
}

/// A project card that tilts toward the pointer.
#[component]
fn TiltCard(project: Project) -> Element {
    let mode = use_theme().mode();
    let mut hover = use_signal(CardHover::default);
    let mut card_node = use_signal(|| None::<Rc<MountedData>>);
    let current = *hover.read();

    let card = card_class(mode);
    let muted = muted_class(mode);
    let strong = strong_class(mode);
    let chip = mode.pick("chip chip-light", "chip chip-dark");
    let image_style = if current.hovered {
        "transform: scale(1.07); transition: transform 0.5s ease-out;"
    } else {
        "transform: scale(1); transition: transform 0.5s ease-out;"
    };
    let glow_style = format!(
        "{} opacity: {};",
        current.tilt.glow_css(),
        if current.hovered { 1 } else { 0 }
    );

    rsx! {
        div {
            class: "work-card {card}",
            style: current.tilt.transform_css(),
            onmounted: move |evt| card_node.set(Some(evt.data())),
            onmouseenter: move |_| hover.write().enter(),
            onmousemove: move |evt| async move {
                // Measure against the card itself; the event may target any descendant
                let point = evt.client_coordinates();
                let Some(node) = card_node.read().clone() else {
                    return;
                };
                match node.get_client_rect().await {
                    Ok(rect) => {
                        let rect = CardRect {
                            left: rect.origin.x,
                            top: rect.origin.y,
                            width: rect.size.width,
                            height: rect.size.height,
                        };
                        let mut current = hover.write();
                        // The pointer may have left while the rect was pending
                        if current.hovered {
                            current.pointer_at(rect, point.x, point.y);
                        }
                    }
                    Err(e) => tracing::debug!(error = ?e, "Card rect unavailable"),
                }
            },
            onmouseleave: move |_| hover.write().leave(),

            div { class: "work-card-glow", style: glow_style }

            div {
                class: "work-card-media",
                {
                    match project.image {
                        Some(src) => rsx! {
                            img {
                                class: "work-card-image",
                                src: "{src}",
                                alt: "{project.title}",
                                style: image_style,
                            }
                        },
                        None => rsx! {
                            div {
                                class: "work-card-placeholder",
                                IconGlyph { icon: Icon::Code }
                            }
                        },
                    }
                }
                if project.featured {
                    span { class: "work-card-badge", "Featured" }
                }
            }

            div {
                class: "work-card-body",
                h3 { class: "work-card-title {strong}", "{project.title}" }
                p { class: "work-card-description {muted}", "{project.description}" }

                div {
                    class: "work-card-tech",
                    for tech in project.tech {
                        span { key: "{tech}", class: chip, "{tech}" }
                    }
                }

                div {
                    class: "work-card-links",
                    if let Some(href) = project.repo_url {
                        a {
                            class: "work-card-link {muted}",
                            href: "{href}",
                            IconGlyph { icon: Icon::GitHub }
                            " Code"
                        }
                    }
                    if let Some(href) = project.live_url {
                        a {
                            class: "work-card-link accent",
                            href: "{href}",
                            IconGlyph { icon: Icon::External }
                            " Live Demo"
                        }
                    }
                }
            }
        }
    }
}
