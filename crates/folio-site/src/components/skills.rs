//! Skills grid and proficiency cards.

use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Easing, Motion, Pose, Stagger, Transition};

use crate::content::{SkillCategory, SKILL_BADGES, SKILL_CATEGORIES};
use crate::state::{card_class, muted_class, strong_class, SectionId};

use super::{IconGlyph, SectionHeading};

const BADGE: Motion = Motion::fade_up(20.0, Transition::new(0.5));
const BADGES: Stagger = Stagger::new(0.0, 0.1);
const CATEGORY: Motion = Motion::fade_up(40.0, Transition::new(0.7).easing(Easing::EXPO_OUT));
const CATEGORIES: Stagger = Stagger::new(0.0, 0.1);
const BAR: Motion = Motion::new(
    Pose::REST.scale_x(0.0),
    Transition::new(1.0).easing(Easing::EXPO_OUT),
);
const BARS: Stagger = Stagger::new(0.3, 0.08);

/// Skills section.
#[component]
pub fn SkillsSection() -> Element {
    let mode = use_theme().mode();
    let grid = use_in_view(0);
    let grid_seen = grid.seen();
    let categories = use_in_view(-60);
    let categories_seen = categories.seen();

    let badge_class = mode.pick("skill-badge skill-badge-light", "skill-badge skill-badge-dark");
    let badge_label = mode.pick("skill-badge-label text-label-light", "skill-badge-label text-label-dark");

    rsx! {
        section {
            id: SectionId::Skills.anchor(),
            class: SectionId::Skills.surface_class(mode),

            div {
                class: "section-inner",

                SectionHeading {
                    title: "My".to_string(),
                    accent: "Skills".to_string(),
                    subtitle: "I specialize in building full-stack applications using the latest technologies and best practices in the industry.".to_string(),
                }

                div {
                    id: "{grid.id}",
                    class: "skills-grid",
                    for (i, skill) in SKILL_BADGES.iter().enumerate() {
                        div {
                            key: "{skill.name}",
                            class: "skill-badge-motion",
                            style: BADGES.apply(BADGE, i).css(grid_seen),
                            div {
                                class: badge_class,
                                span {
                                    style: "color: {skill.tint};",
                                    IconGlyph {
                                        icon: skill.icon,
                                        class: "skill-badge-icon".to_string(),
                                    }
                                }
                                span { class: badge_label, "{skill.name}" }
                            }
                        }
                    }
                }

                div {
                    id: "{categories.id}",
                    class: "skill-categories",
                    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
                        SkillCategoryCard {
                            key: "{category.title}",
                            category: *category,
                            index: i,
                            revealed: categories_seen,
                        }
                    }
                }
            }
        }
    }
}

/// A category card with animated proficiency bars.
#[component]
fn SkillCategoryCard(category: SkillCategory, index: usize, revealed: bool) -> Element {
    let mode = use_theme().mode();
    let muted = muted_class(mode);
    let strong = strong_class(mode);
    let card = card_class(mode);
    let track = mode.pick("skill-track skill-track-light", "skill-track skill-track-dark");

    rsx! {
        div {
            class: "skill-category {card}",
            style: CATEGORIES.apply(CATEGORY, index).css(revealed),

            div {
                class: "skill-category-header",
                IconGlyph {
                    icon: category.icon,
                    class: "skill-category-icon".to_string(),
                }
                div {
                    h3 { class: "skill-category-title {strong}", "{category.title}" }
                    p { class: "skill-category-description {muted}", "{category.description}" }
                }
            }

            for (j, skill) in category.skills.iter().enumerate() {
                div {
                    key: "{skill.name}",
                    class: "skill-row",
                    div {
                        class: "skill-row-header",
                        span { class: strong, "{skill.name}" }
                        span { class: muted, "{skill.level}%" }
                    }
                    div {
                        class: track,
                        div {
                            class: "skill-fill",
                            style: "width: {skill.level}%;",
                            div {
                                class: "skill-fill-inner",
                                style: format!(
                                    "background: {}; {}",
                                    skill.tint,
                                    BARS.apply(BAR, j).delayed(index as f32 * 0.1).css(revealed)
                                ),
                            }
                        }
                    }
                }
            }
        }
    }
}
