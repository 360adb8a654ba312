//! Drifting particle backdrop, rendered as SVG from Rust state.

use std::time::Duration;

use dioxus::prelude::*;
use folio_ui::use_theme;

use crate::state::{rgba, ParticleField};

/// Interval between animation frames.
const FRAME: Duration = Duration::from_millis(16);

/// Fills its parent with drifting, linked particles.
///
/// The field starts without area and is scattered on the first size
/// measurement. The animation loop stops when the component unmounts.
#[component]
pub fn ParticleCanvas(count: usize) -> Element {
    let dark = use_theme().is_dark();
    let mut field = use_signal(move || ParticleField::new(count, 0.0, 0.0, &mut rand::rng()));

    let _animation_loop = use_future(move || async move {
        let mut field = field;
        let mut ticker = tokio::time::interval(FRAME);
        loop {
            ticker.tick().await;
            let has_area = field.read().has_area();
            if has_area {
                field.write().step();
            }
        }
    });

    let ((width, height), frame) = {
        let snapshot = field.read();
        (snapshot.size(), snapshot.frame())
    };

    rsx! {
        div {
            class: "particle-canvas",
            onresize: move |evt| {
                if let Ok(size) = evt.get_content_box_size() {
                    field.write().fit(size.width, size.height, &mut rand::rng());
                }
            },

            svg {
                width: "100%",
                height: "100%",
                view_box: "0 0 {width} {height}",
                "aria-hidden": "true",

                for (i, segment) in frame.links.iter().enumerate() {
                    line {
                        key: "l{i}",
                        x1: "{segment.x1}",
                        y1: "{segment.y1}",
                        x2: "{segment.x2}",
                        y2: "{segment.y2}",
                        stroke: rgba(dark, segment.opacity),
                        stroke_width: "0.5",
                    }
                }

                for (i, particle) in frame.dots.iter().enumerate() {
                    circle {
                        key: "p{i}",
                        cx: "{particle.x}",
                        cy: "{particle.y}",
                        r: "{particle.radius}",
                        fill: rgba(dark, particle.alpha),
                    }
                }
            }
        }
    }
}
