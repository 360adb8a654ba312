//! Pointer-driven 3D tilt for project cards.

/// Pointer offset from the card centre, in pixels, that maps to full tilt.
pub const TILT_RANGE: f64 = 80.0;

/// Maximum rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 10.0;

/// Maps `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamped.
fn map_clamped(value: f64, (in_min, in_max): (f64, f64), (out_min, out_max): (f64, f64)) -> f64 {
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Rotation and glow position for one pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Glow centre as a percentage of card width.
    pub glow_x: f64,
    /// Glow centre as a percentage of card height.
    pub glow_y: f64,
}

impl Tilt {
    /// No rotation, glow centred.
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glow_x: 50.0,
        glow_y: 50.0,
    };

    /// Computes the tilt for a pointer at (`dx`, `dy`) from the centre.
    ///
    /// Moving down tips the top edge away, moving right turns the card
    /// right.
    pub fn from_offset(dx: f64, dy: f64) -> Self {
        let range = (-TILT_RANGE, TILT_RANGE);
        Self {
            rotate_x: map_clamped(dy, range, (MAX_TILT_DEG, -MAX_TILT_DEG)),
            rotate_y: map_clamped(dx, range, (-MAX_TILT_DEG, MAX_TILT_DEG)),
            glow_x: map_clamped(dx, range, (0.0, 100.0)),
            glow_y: map_clamped(dy, range, (0.0, 100.0)),
        }
    }

    /// Returns the inline transform style.
    pub fn transform_css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            self.rotate_x, self.rotate_y
        )
    }

    /// Returns the inline glow background.
    pub fn glow_css(&self) -> String {
        format!(
            "background: radial-gradient(circle at {:.1}% {:.1}%, rgba(59,130,246,0.15), transparent 70%);",
            self.glow_x, self.glow_y
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::FLAT
    }
}

/// A card's bounding box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    /// Returns the offset of a client-space point from the centre.
    pub fn offset_from_centre(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - self.left - self.width / 2.0,
            client_y - self.top - self.height / 2.0,
        )
    }
}

/// Hover state of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardHover {
    pub hovered: bool,
    pub tilt: Tilt,
}

impl CardHover {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Updates the tilt from a pointer in client coordinates, measured
    /// against the card's own box so nested targets give the same result.
    pub fn pointer_at(&mut self, rect: CardRect, client_x: f64, client_y: f64) {
        let (dx, dy) = rect.offset_from_centre(client_x, client_y);
        self.tilt = Tilt::from_offset(dx, dy);
    }

    /// Flattens the card and clears the hover flag.
    pub fn leave(&mut self) {
        self.hovered = false;
        self.tilt = Tilt::FLAT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_flat() {
        assert_eq!(Tilt::from_offset(0.0, 0.0), Tilt::FLAT);
    }

    #[test]
    fn test_extremes_clamp() {
        let tilt = Tilt::from_offset(500.0, -500.0);
        assert_eq!(tilt.rotate_y, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, MAX_TILT_DEG);
        assert_eq!(tilt.glow_x, 100.0);
        assert_eq!(tilt.glow_y, 0.0);
    }

    #[test]
    fn test_half_range() {
        let tilt = Tilt::from_offset(-40.0, 40.0);
        assert!((tilt.rotate_y + 5.0).abs() < 1e-9);
        assert!((tilt.rotate_x + 5.0).abs() < 1e-9);
        assert!((tilt.glow_x - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_card_hover_cycle() {
        let rect = CardRect {
            left: 0.0,
            top: 0.0,
            width: 300.0,
            height: 400.0,
        };
        let mut card = CardHover::default();
        card.enter();
        card.pointer_at(rect, 300.0, 200.0);
        assert!(card.hovered);
        assert!(card.tilt.rotate_y > 0.0);
        assert_eq!(card.tilt.rotate_x, 0.0);

        card.leave();
        assert!(!card.hovered);
        assert_eq!(card.tilt, Tilt::FLAT);
    }

    #[test]
    fn test_pointer_measured_from_card_origin() {
        // A card scrolled to (100, 300) in the viewport, 300 x 400
        let rect = CardRect {
            left: 100.0,
            top: 300.0,
            width: 300.0,
            height: 400.0,
        };
        let mut card = CardHover::default();

        // Over the description text, well below the card's top edge
        card.pointer_at(rect, 250.0, 476.0);
        assert!((card.tilt.rotate_x - 3.0).abs() < 1e-9);
        assert_eq!(card.tilt.rotate_y, 0.0);

        card.pointer_at(rect, 290.0, 540.0);
        assert!((card.tilt.rotate_y - 5.0).abs() < 1e-9);
        assert!((card.tilt.rotate_x + 5.0).abs() < 1e-9);
        assert!((card.tilt.glow_x - 75.0).abs() < 1e-9);
        assert!((card.tilt.glow_y - 75.0).abs() < 1e-9);

        card.pointer_at(rect, 250.0, 500.0);
        assert_eq!(card.tilt, Tilt::FLAT);
    }

    #[test]
    fn test_transform_css() {
        let css = Tilt::from_offset(80.0, 0.0).transform_css();
        assert!(css.contains("rotateX(0.00deg)"));
        assert!(css.contains("rotateY(10.00deg)"));
    }
}
