//! Declarative animation descriptors.
//!
//! Sections describe *what* should animate as data: a hidden and a shown
//! [`Pose`], a [`Transition`] with duration, delay and easing, or an endless
//! [`LoopAnimation`]. A [`MotionEngine`] turns those descriptors into
//! something the renderer understands. The default engine,
//! [`CssTransitions`], emits inline CSS and lets the webview interpolate.

use std::fmt::Write;

/// Easing curve for a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The "expo out" curve used by the card and timeline entrances.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// Returns the CSS timing function.
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Timing for a single transition, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Visual state of an element. Offsets are pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Transparent and shifted by (`x`, `y`).
    pub const fn faded(x: f32, y: f32) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
            ..Pose::REST
        }
    }

    pub const fn scale(mut self, scale: f32) -> Pose {
        self.scale = scale;
        self
    }

    pub const fn scale_x(mut self, scale_x: f32) -> Pose {
        self.scale_x = scale_x;
        self
    }

    pub const fn scale_y(mut self, scale_y: f32) -> Pose {
        self.scale_y = scale_y;
        self
    }

    /// Returns the CSS transform, or `None` for the identity transform.
    pub fn transform_css(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate3d({}px, {}px, 0)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", self.scale_x));
        }
        if self.scale_y != 1.0 {
            parts.push(format!("scaleY({})", self.scale_y));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// An entrance animation: hidden until activated, then shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(hidden: Pose, transition: Transition) -> Self {
        Self {
            hidden,
            shown: Pose::REST,
            transition,
        }
    }

    /// Fade in while rising by `distance` pixels.
    pub const fn fade_up(distance: f32, transition: Transition) -> Self {
        Self::new(Pose::faded(0.0, distance), transition)
    }

    /// Fade in while sliding horizontally from `offset` pixels.
    pub const fn fade_x(offset: f32, transition: Transition) -> Self {
        Self::new(Pose::faded(offset, 0.0), transition)
    }

    /// Plain fade in.
    pub const fn fade(transition: Transition) -> Self {
        Self::new(Pose::faded(0.0, 0.0), transition)
    }

    /// Returns a copy with extra delay added.
    pub const fn delayed(mut self, extra: f32) -> Self {
        self.transition.delay += extra;
        self
    }

    /// Returns the pose for the given activation state.
    pub fn pose(&self, active: bool) -> Pose {
        if active { self.shown } else { self.hidden }
    }

    /// Renders with the default CSS engine.
    pub fn css(&self, active: bool) -> String {
        CssTransitions.render(self, active)
    }
}

/// Parent-driven delays for a list of children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f32,
    pub step: f32,
}

impl Stagger {
    pub const fn new(delay_children: f32, step: f32) -> Self {
        Self {
            delay_children,
            step,
        }
    }

    /// Delay, in seconds, for the child at `index`.
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay_children + self.step * index as f32
    }

    /// Applies this stagger to `motion` for the child at `index`.
    pub fn apply(&self, motion: Motion, index: usize) -> Motion {
        motion.delayed(self.delay_for(index))
    }
}

/// An animation that repeats forever, backed by a named keyframe set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopAnimation {
    pub keyframes: &'static str,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    pub reverse: bool,
}

impl LoopAnimation {
    pub const fn new(keyframes: &'static str, duration: f32) -> Self {
        Self {
            keyframes,
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            reverse: false,
        }
    }

    pub const fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Renders with the default CSS engine.
    pub fn css(&self) -> String {
        CssTransitions.render_loop(self)
    }
}

/// Interprets motion descriptors for a rendering backend.
pub trait MotionEngine {
    /// Style for an entrance animation in the given activation state.
    fn render(&self, motion: &Motion, active: bool) -> String;

    /// Style for an endless animation.
    fn render_loop(&self, animation: &LoopAnimation) -> String;
}

/// Emits inline CSS transitions and keyframe animations.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssTransitions;

impl MotionEngine for CssTransitions {
    fn render(&self, motion: &Motion, active: bool) -> String {
        let pose = motion.pose(active);
        let t = motion.transition;
        let easing = t.easing.css();

        let mut style = String::new();
        let _ = write!(style, "opacity: {};", pose.opacity);
        let _ = write!(
            style,
            " transform: {};",
            pose.transform_css().as_deref().unwrap_or("none")
        );
        let _ = write!(
            style,
            " transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = t.duration,
            e = easing,
            w = t.delay,
        );
        style
    }

    fn render_loop(&self, animation: &LoopAnimation) -> String {
        format!(
            "animation: {} {}s {} {}s infinite {};",
            animation.keyframes,
            animation.duration,
            animation.easing.css(),
            animation.delay,
            if animation.reverse { "reverse" } else { "normal" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_has_no_transform() {
        assert_eq!(Pose::REST.transform_css(), None);
        assert_eq!(
            Pose::faded(0.0, 30.0).transform_css().as_deref(),
            Some("translate3d(0px, 30px, 0)")
        );
        assert_eq!(
            Pose::REST.scale_x(0.0).transform_css().as_deref(),
            Some("scaleX(0)")
        );
    }

    #[test]
    fn test_motion_css_hidden_and_shown() {
        let motion = Motion::fade_up(20.0, Transition::new(0.6).delay(0.1));

        let hidden = motion.css(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 20px, 0)"));

        let shown = motion.css(true);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
        assert!(shown.contains("opacity 0.6s ease-out 0.1s"));
    }

    #[test]
    fn test_transition_uses_default_easing() {
        assert_eq!(Easing::default(), Easing::EaseOut);
        assert_eq!(Transition::new(0.4).easing, Easing::default());
    }

    #[test]
    fn test_cubic_bezier_css() {
        assert_eq!(Easing::EXPO_OUT.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(0.1, 0.12);
        assert!((stagger.delay_for(0) - 0.1).abs() < f32::EPSILON);
        assert!((stagger.delay_for(3) - 0.46).abs() < 1e-6);

        let motion = stagger.apply(Motion::fade(Transition::new(0.7).delay(0.05)), 2);
        assert!((motion.transition.delay - 0.39).abs() < 1e-6);
    }

    #[test]
    fn test_loop_css() {
        let spin = LoopAnimation::new("folio-spin", 60.0).reversed();
        assert_eq!(
            spin.css(),
            "animation: folio-spin 60s linear 0s infinite reverse;"
        );
    }
}
