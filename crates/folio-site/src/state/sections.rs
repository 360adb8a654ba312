//! Page sections and their shared surface styling.

use folio_ui::ThemeMode;

/// The page sections, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Skills,
    Work,
    About,
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Skills,
        SectionId::Work,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Returns the DOM id used as the scroll anchor.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Skills => "skills",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    /// Returns the navbar label.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Skills => "Skills",
            SectionId::Work => "Work",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    /// Returns the `href` that scrolls to this section.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Returns the section's root class for `mode`.
    ///
    /// Every section derives its background and text colour from this one
    /// place, so all of them switch together.
    pub fn surface_class(self, mode: ThemeMode) -> String {
        format!(
            "section section-{} {}",
            self.anchor(),
            mode.pick("surface-light", "surface-dark")
        )
    }
}

/// Secondary text colour.
pub fn muted_class(mode: ThemeMode) -> &'static str {
    mode.pick("text-muted-light", "text-muted-dark")
}

/// Primary heading colour.
pub fn strong_class(mode: ThemeMode) -> &'static str {
    mode.pick("text-strong-light", "text-strong-dark")
}

/// Frosted card background and border.
pub fn card_class(mode: ThemeMode) -> &'static str {
    mode.pick("glass-card glass-card-light", "glass-card glass-card-dark")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["hero", "skills", "work", "about", "contact"]);
    }

    #[test]
    fn test_every_surface_follows_mode() {
        let mut mode = ThemeMode::Light;
        for _ in 0..2 {
            mode = mode.toggled();
            for section in SectionId::ALL {
                let class = section.surface_class(mode);
                let (expected, other) = mode.pick(
                    ("surface-light", "surface-dark"),
                    ("surface-dark", "surface-light"),
                );
                assert!(class.contains(expected), "{section:?} missing {expected}");
                assert!(!class.contains(other), "{section:?} still has {other}");
            }
        }
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_shared_classes_follow_mode() {
        assert!(muted_class(ThemeMode::Dark).ends_with("dark"));
        assert!(strong_class(ThemeMode::Light).ends_with("light"));
        assert!(card_class(ThemeMode::Dark).ends_with("dark"));
    }
}
