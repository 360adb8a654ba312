//! Fixed top navigation with section links and the theme toggle.

use dioxus::prelude::*;
use folio_ui::{use_theme, ThemeToggle};

use crate::content::HERO;
use crate::state::SectionId;

/// Top navigation bar.
#[component]
pub fn Navbar() -> Element {
    let mode = use_theme().mode();
    let mut menu_open = use_signal(|| false);
    let open = *menu_open.read();

    rsx! {
        nav {
            class: mode.pick("navbar navbar-light", "navbar navbar-dark"),

            div {
                class: "navbar-inner",

                a {
                    class: "navbar-brand",
                    href: SectionId::Hero.href(),
                    "{HERO.name}"
                }

                div {
                    class: "navbar-links",
                    for section in SectionId::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "navbar-link",
                            href: section.href(),
                            "{section.nav_label()}"
                        }
                    }
                }

                div {
                    class: "navbar-actions",
                    ThemeToggle {}
                    button {
                        class: "navbar-menu-btn",
                        r#type: "button",
                        "aria-label": "Toggle menu",
                        onclick: move |_| menu_open.set(!open),
                        if open { "✕" } else { "☰" }
                    }
                }
            }

            if open {
                div {
                    class: mode.pick("navbar-mobile navbar-mobile-light", "navbar-mobile navbar-mobile-dark"),
                    for section in SectionId::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "navbar-mobile-link",
                            href: section.href(),
                            onclick: move |_| menu_open.set(false),
                            "{section.nav_label()}"
                        }
                    }
                }
            }
        }
    }
}
