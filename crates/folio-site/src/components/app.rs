//! Root composition: theme provider, navbar, then every section in order.

use dioxus::prelude::*;
use folio_ui::{use_theme_provider, ThemedRoot};

use crate::config::SiteConfig;

use super::{AboutSection, ContactSection, HeroSection, Navbar, SkillsSection, WorkSection};

/// Root application component.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();

    // The one theme store for the whole page
    use_theme_provider(config.initial_theme);

    rsx! {
        ThemedRoot {
            div {
                class: "folio",

                Navbar {}

                main {
                    HeroSection {}
                    SkillsSection {}
                    WorkSection {}
                    AboutSection {}
                    ContactSection { particle_count: config.particle_count }
                }
            }
        }
    }
}
