//! Theme store for Folio.
//!
//! Two palettes, light and dark. The current mode lives in a [`ThemeStore`]
//! that the root component provides as context; descendants read it with
//! [`use_theme`]. There is no module-level theme state, so every
//! `VirtualDom` (and every test) gets an independent store.

use dioxus::prelude::*;

/// The two visual palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns true for the dark palette.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Selects the value matching this mode.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        }
    }

    /// Returns the CSS data-theme attribute value.
    pub fn css_value(self) -> &'static str {
        self.pick("light", "dark")
    }

    /// Returns the display name for the mode.
    pub fn display_name(self) -> &'static str {
        self.pick("Light", "Dark")
    }
}

/// Plain theme state, independent of any reactive runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Creates a state starting in `mode`.
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

/// Reactive handle to the theme, shared through context.
///
/// Copying the handle is cheap; all copies point at the same signal, so
/// every component observing it sees the same mode within a render pass.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    state: Signal<ThemeState>,
}

impl ThemeStore {
    /// Wraps an existing signal.
    pub fn from_signal(state: Signal<ThemeState>) -> Self {
        Self { state }
    }

    /// Returns the current mode and subscribes the caller to changes.
    pub fn mode(&self) -> ThemeMode {
        self.state.read().mode()
    }

    /// Returns whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flips the mode. Every subscribed component re-renders.
    pub fn toggle(&mut self) -> ThemeMode {
        let mode = self.state.write().toggle();
        tracing::debug!(theme = mode.css_value(), "Theme toggled");
        mode
    }
}

/// Creates the theme store and provides it to all descendants.
///
/// Call once, at the composition root.
pub fn use_theme_provider(initial: ThemeMode) -> ThemeStore {
    use_context_provider(|| ThemeStore::from_signal(Signal::new(ThemeState::new(initial))))
}

/// Returns the store provided by the nearest ancestor.
pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}

/// Root wrapper that applies the current theme as a data attribute.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme().mode();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let mode = theme.mode();
    let label = format!("Switch to {} mode", mode.toggled().display_name().to_lowercase());
    let class = mode.pick("theme-toggle theme-toggle-light", "theme-toggle theme-toggle-dark");

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |_| {
                theme.toggle();
            },
            if mode.is_dark() { "☀" } else { "☾" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    thread_local! {
        static PROVIDED: Cell<Option<ThemeStore>> = const { Cell::new(None) };
        static READS: RefCell<Vec<ThemeMode>> = const { RefCell::new(Vec::new()) };
    }

    #[component]
    fn StoreRoot() -> Element {
        let store = use_theme_provider(ThemeMode::Dark);
        PROVIDED.with(|cell| cell.set(Some(store)));
        rsx! {
            ModeReader {}
            ModeReader {}
        }
    }

    #[component]
    fn ModeReader() -> Element {
        let mode = use_theme().mode();
        READS.with(|reads| reads.borrow_mut().push(mode));
        rsx! { span { "{mode.css_value()}" } }
    }

    #[test]
    fn test_store_shared_through_context() {
        let mut dom = VirtualDom::new(StoreRoot);
        dom.rebuild_in_place();

        let reads = READS.with(|reads| reads.borrow().clone());
        assert_eq!(reads, vec![ThemeMode::Dark, ThemeMode::Dark]);

        let mut store = PROVIDED.with(|cell| cell.get()).unwrap();
        dom.in_runtime(|| {
            assert_eq!(store.toggle(), ThemeMode::Light);
            assert!(!store.is_dark());
            assert_eq!(store.toggle(), ThemeMode::Dark);
            assert_eq!(store.mode(), ThemeMode::Dark);
        });
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        let mut state = ThemeState::new(ThemeMode::Light);
        assert_eq!(state.toggle(), ThemeMode::Dark);
        assert!(state.is_dark());
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state, ThemeState::new(ThemeMode::Light));
    }

    #[test]
    fn test_independent_states() {
        let mut a = ThemeState::default();
        let b = ThemeState::default();
        a.toggle();
        assert!(a.is_dark());
        assert!(!b.is_dark());
    }

    #[test]
    fn test_pick_follows_mode() {
        assert_eq!(ThemeMode::Light.pick("l", "d"), "l");
        assert_eq!(ThemeMode::Dark.pick("l", "d"), "d");
    }
}
