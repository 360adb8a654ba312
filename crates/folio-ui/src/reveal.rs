//! Fire-once viewport visibility.
//!
//! An element starts [`Visibility::Unseen`] and flips to
//! [`Visibility::Seen`] the first time it intersects the viewport. It never
//! flips back, so entrance animations play exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

/// Counter for unique observer element ids.
static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Whether an element has entered the viewport yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unseen,
    Seen,
}

impl Visibility {
    /// Returns true once the element has been seen.
    pub fn is_seen(self) -> bool {
        matches!(self, Visibility::Seen)
    }

    /// Feeds an intersection sample. Returns true only on the
    /// `Unseen -> Seen` edge.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Visibility::Unseen, true) => {
                *self = Visibility::Seen;
                true
            }
            _ => false,
        }
    }
}

/// Handle returned by [`use_in_view`].
#[derive(Clone, PartialEq)]
pub struct InView {
    /// DOM id to put on the tracked element.
    pub id: String,
    state: Signal<Visibility>,
}

impl InView {
    /// Returns whether the element has entered the viewport.
    pub fn seen(&self) -> bool {
        self.state.read().is_seen()
    }
}

/// Builds the observer script for element `id`.
///
/// `margin_px` is applied on every side of the viewport; negative values
/// require the element to be that far inside before it counts. The script
/// waits a few frames for the element to be attached, sends `true` once and
/// disconnects. Live observers are kept in `window.__folioReveal` so
/// [`release_script`] can disconnect them.
pub fn observer_script(id: &str, margin_px: i32) -> String {
    format!(
        r#"
        const id = "{id}";
        const margin = "{margin_px}px";
        const live = (window.__folioReveal = window.__folioReveal || {{}});
        live[id] = {{ io: null, released: false }};
        const entry = live[id];
        let tries = 0;
        const attach = () => {{
            if (entry.released) {{ return; }}
            const el = document.getElementById(id);
            if (!el) {{
                if (tries++ < 120) {{ requestAnimationFrame(attach); }} else {{ delete live[id]; dioxus.send(true); }}
                return;
            }}
            if (typeof IntersectionObserver === "undefined") {{
                delete live[id];
                dioxus.send(true);
                return;
            }}
            const io = new IntersectionObserver((entries) => {{
                for (const e of entries) {{
                    if (e.isIntersecting) {{
                        io.disconnect();
                        delete live[id];
                        dioxus.send(true);
                        return;
                    }}
                }}
            }}, {{ rootMargin: margin }});
            entry.io = io;
            io.observe(el);
        }};
        attach();
        "#
    )
}

/// Builds the script that disconnects the observer for `id`, if it is
/// still waiting.
pub fn release_script(id: &str) -> String {
    format!(
        r#"
        const live = window.__folioReveal || {{}};
        const entry = live["{id}"];
        if (entry) {{
            entry.released = true;
            if (entry.io) {{ entry.io.disconnect(); }}
            delete live["{id}"];
        }}
        "#
    )
}

/// Tracks when the element carrying the returned id first enters the
/// viewport.
pub fn use_in_view(margin_px: i32) -> InView {
    let id = use_hook(|| {
        format!(
            "reveal-{}",
            NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let state = use_signal(Visibility::default);

    let target = id.clone();
    use_future(move || {
        let target = target.clone();
        let mut state = state;
        async move {
            let mut eval = document::eval(&observer_script(&target, margin_px));
            loop {
                match eval.recv::<bool>().await {
                    Ok(intersecting) => {
                        if state.write().observe(intersecting) {
                            tracing::debug!(element = %target, "Element revealed");
                        }
                        if state.peek().is_seen() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(element = %target, error = ?e, "Viewport observer failed, revealing");
                        state.write().observe(true);
                        break;
                    }
                }
            }
        }
    });

    let released = id.clone();
    use_drop(move || {
        let _ = document::eval(&release_script(&released));
    });

    InView { id, state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intersection_reveals() {
        let mut v = Visibility::default();
        assert!(!v.observe(false));
        assert_eq!(v, Visibility::Unseen);
        assert!(v.observe(true));
        assert!(v.is_seen());
    }

    #[test]
    fn test_seen_never_reverts() {
        let mut v = Visibility::Unseen;
        v.observe(true);
        for sample in [false, true, false, false, true] {
            assert!(!v.observe(sample));
            assert_eq!(v, Visibility::Seen);
        }
    }

    #[test]
    fn test_observer_script_embeds_id_and_margin() {
        let script = observer_script("reveal-3", -80);
        assert!(script.contains(r#"const id = "reveal-3";"#));
        assert!(script.contains(r#"const margin = "-80px";"#));
        assert!(script.contains("io.disconnect()"));
        assert!(script.contains("window.__folioReveal"));
    }

    #[test]
    fn test_release_script_targets_id() {
        let script = release_script("reveal-9");
        assert!(script.contains(r#"live["reveal-9"]"#));
        assert!(script.contains("entry.released = true"));
        assert!(script.contains("entry.io.disconnect()"));
    }
}
