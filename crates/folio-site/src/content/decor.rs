//! Decorative shapes: blurred orbs and rotating rings.

use folio_ui::{Easing, LoopAnimation, ThemeMode};

/// Colour family of a decorative shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Blue,
    Purple,
    Indigo,
}

impl Hue {
    /// Returns the CSS class for a blurred orb of this hue.
    pub fn orb_class(self, mode: ThemeMode) -> &'static str {
        match self {
            Hue::Blue => mode.pick("orb orb-blue-light", "orb orb-blue-dark"),
            Hue::Purple => mode.pick("orb orb-purple-light", "orb orb-purple-dark"),
            Hue::Indigo => mode.pick("orb orb-indigo-light", "orb orb-indigo-dark"),
        }
    }

    /// Returns the CSS border colour for a ring of this hue.
    pub fn ring_color(self, mode: ThemeMode) -> &'static str {
        match self {
            Hue::Blue => mode.pick("var(--blue-500)", "var(--blue-400)"),
            Hue::Purple => mode.pick("var(--purple-500)", "var(--purple-400)"),
            Hue::Indigo => "var(--indigo-500)",
        }
    }
}

/// Absolute offsets inside the parent, as CSS lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub top: Option<&'static str>,
    pub right: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub left: Option<&'static str>,
}

impl Placement {
    /// Returns the inline style for the offsets that are set.
    pub fn css(&self) -> String {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
        .iter()
        .filter_map(|(side, value)| value.map(|v| format!("{side}: {v};")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// A blurred background orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub size_px: u32,
    pub placement: Placement,
    pub hue: Hue,
    pub animation: Option<LoopAnimation>,
}

/// A thick, faint ring that spins slowly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub size_px: u32,
    pub border_px: u32,
    pub opacity: f32,
    pub placement: Placement,
    pub hue: Hue,
    pub animation: LoopAnimation,
}

const fn drift(duration: f32, delay: f32) -> Option<LoopAnimation> {
    Some(
        LoopAnimation::new("folio-drift", duration)
            .delay(delay)
            .easing(Easing::EaseInOut),
    )
}

pub static ABOUT_ORBS: &[Orb] = &[
    Orb {
        size_px: 380,
        placement: Placement { top: Some("-10%"), right: Some("-8%"), bottom: None, left: None },
        hue: Hue::Blue,
        animation: drift(10.0, 0.0),
    },
    Orb {
        size_px: 280,
        placement: Placement { top: None, right: None, bottom: Some("5%"), left: Some("-5%") },
        hue: Hue::Purple,
        animation: drift(13.0, 3.0),
    },
    Orb {
        size_px: 200,
        placement: Placement { top: Some("40%"), right: Some("20%"), bottom: None, left: None },
        hue: Hue::Indigo,
        animation: drift(16.0, 6.0),
    },
];

pub static WORK_ORBS: &[Orb] = &[
    Orb {
        size_px: 384,
        placement: Placement { top: Some("-160px"), right: Some("-160px"), bottom: None, left: None },
        hue: Hue::Blue,
        animation: None,
    },
    Orb {
        size_px: 384,
        placement: Placement { top: None, right: None, bottom: Some("-160px"), left: Some("-160px") },
        hue: Hue::Purple,
        animation: None,
    },
];

pub static CONTACT_RINGS: &[Ring] = &[
    Ring {
        size_px: 600,
        border_px: 80,
        opacity: 0.06,
        placement: Placement { top: None, right: Some("-160px"), bottom: Some("-160px"), left: None },
        hue: Hue::Blue,
        animation: LoopAnimation::new("folio-spin", 60.0),
    },
    Ring {
        size_px: 400,
        border_px: 60,
        opacity: 0.05,
        placement: Placement { top: Some("-128px"), right: None, bottom: None, left: Some("-128px") },
        hue: Hue::Purple,
        animation: LoopAnimation::new("folio-spin", 80.0).reversed(),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_css_skips_unset_sides() {
        let placement = Placement {
            top: Some("40%"),
            right: Some("20%"),
            ..Placement::default()
        };
        assert_eq!(placement.css(), "top: 40%; right: 20%;");
        assert_eq!(Placement::default().css(), "");
    }

    #[test]
    fn test_orb_class_follows_mode() {
        assert!(Hue::Blue.orb_class(ThemeMode::Dark).ends_with("-dark"));
        assert!(Hue::Purple.orb_class(ThemeMode::Light).ends_with("-light"));
    }

    #[test]
    fn test_contact_rings_counter_rotate() {
        assert!(!CONTACT_RINGS[0].animation.reverse);
        assert!(CONTACT_RINGS[1].animation.reverse);
    }
}
