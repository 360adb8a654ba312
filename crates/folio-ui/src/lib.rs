//! Shared UI building blocks for the Folio site.
//!
//! Provides the light/dark theme store, declarative motion descriptors with
//! a CSS interpreter, and fire-once viewport reveal tracking.

pub mod motion;
pub mod reveal;
pub mod theme;

pub use motion::{CssTransitions, Easing, LoopAnimation, Motion, MotionEngine, Pose, Stagger, Transition};
pub use reveal::{use_in_view, observer_script, release_script, InView, Visibility};
pub use theme::{use_theme, use_theme_provider, ThemeMode, ThemeState, ThemeStore, ThemeToggle, ThemedRoot};

/// Shared CSS containing design tokens, keyframes, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
