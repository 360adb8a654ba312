//! Contact section: details, socials and the simulated message form.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_ui::{use_in_view, use_theme, Easing, LoopAnimation, Motion, Transition};

use crate::content::{Icon, CONTACT_INFO, CONTACT_RINGS, SOCIAL_LINKS};
use crate::state::{
    card_class, muted_class, run_delivery, strong_class, ContactForm, Field, SectionId,
    SubmitStatus, SubmitTiming,
};

use super::{FloatingField, IconGlyph, ParticleCanvas, SectionHeading};

const INFO_CARD: Motion = Motion::fade_x(-40.0, Transition::new(0.7).easing(Easing::EXPO_OUT));
const FORM_CARD: Motion =
    Motion::fade_x(40.0, Transition::new(0.7).delay(0.1).easing(Easing::EXPO_OUT));
const FOOTER: Motion = Motion::fade(Transition::new(0.7).delay(0.5));
const SPINNER: LoopAnimation = LoopAnimation::new("folio-spin", 1.0);

/// Contact section.
#[component]
pub fn ContactSection(particle_count: usize) -> Element {
    let mode = use_theme().mode();
    let view = use_in_view(-60);
    let seen = view.seen();

    let muted = muted_class(mode);
    let strong = strong_class(mode);
    let card = card_class(mode);
    let year = chrono::Local::now().year();

    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: SectionId::Contact.surface_class(mode),

            ParticleCanvas { count: particle_count }

            for (i, ring) in CONTACT_RINGS.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "ring",
                    style: format!(
                        "width: {0}px; height: {0}px; border: {1}px solid {2}; opacity: {3}; {4} {5}",
                        ring.size_px,
                        ring.border_px,
                        ring.hue.ring_color(mode),
                        ring.opacity,
                        ring.placement.css(),
                        ring.animation.css()
                    ),
                }
            }

            div { class: mode.pick("contact-overlay contact-overlay-light", "contact-overlay contact-overlay-dark") }

            div {
                class: "section-inner",

                SectionHeading {
                    eyebrow: "Let's Talk".to_string(),
                    title: "Get in".to_string(),
                    accent: "Touch".to_string(),
                    subtitle: "Have a project in mind or just want to say hello? My inbox is always open.".to_string(),
                }

                div {
                    id: "{view.id}",
                    class: "contact-layout",

                    div {
                        class: "contact-info {card}",
                        style: INFO_CARD.css(seen),

                        h3 { class: "contact-info-title {strong}", "Let's build something together" }
                        p {
                            class: "contact-info-text {muted}",
                            "I'm currently available for freelance work and full-time roles. Drop me a line and I'll get back to you within a day."
                        }

                        div {
                            class: "contact-details",
                            for info in CONTACT_INFO {
                                div {
                                    key: "{info.label}",
                                    class: "contact-detail",
                                    IconGlyph {
                                        icon: info.icon,
                                        class: "contact-detail-icon".to_string(),
                                    }
                                    div {
                                        span { class: "contact-detail-label {muted}", "{info.label}" }
                                        span { class: "contact-detail-value {strong}", "{info.value}" }
                                    }
                                }
                            }
                        }

                        div {
                            class: "contact-socials",
                            for link in SOCIAL_LINKS {
                                a {
                                    key: "{link.label}",
                                    class: mode.pick("social-link social-link-light", "social-link social-link-dark"),
                                    href: "{link.href}",
                                    title: "{link.label}",
                                    IconGlyph { icon: link.icon }
                                }
                            }
                        }
                    }

                    div {
                        class: "contact-form-card {card}",
                        style: FORM_CARD.css(seen),
                        ContactFormPanel {}
                    }
                }

                footer {
                    class: "site-footer {muted}",
                    style: FOOTER.css(seen),
                    "Crafted with care "
                    IconGlyph { icon: Icon::Heart, class: "accent".to_string() }
                    " · {year}"
                }
            }
        }
    }
}

/// The message form and its confirmation panel.
#[component]
fn ContactFormPanel() -> Element {
    let mut form = use_signal(ContactForm::new);

    // Outstanding delivery timers must not touch a form that is gone
    use_drop(move || {
        if let Ok(mut current) = form.try_write() {
            current.teardown();
        }
    });

    let snapshot = form.read().clone();
    let status = snapshot.status();
    let sending = snapshot.is_sending();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(ticket) => {
                spawn(async move {
                    let mut form = form;
                    let completed = run_delivery(SubmitTiming::default(), move |stage| {
                        match form.try_write() {
                            Ok(mut current) => current.advance(ticket, stage),
                            Err(_) => false,
                        }
                    })
                    .await;
                    tracing::debug!(completed, "Contact delivery cycle finished");
                });
            }
            Err(e) => tracing::debug!(error = %e, "Contact submit refused"),
        }
    };

    if status == SubmitStatus::Sent {
        return rsx! {
            div {
                class: "contact-sent",
                div {
                    class: "contact-sent-badge",
                    IconGlyph { icon: Icon::Check }
                }
                h3 { class: "contact-sent-title", "Message Sent!" }
                p { class: "contact-sent-text", "Thanks for reaching out. I'll get back to you soon." }
            }
        };
    }

    rsx! {
        form {
            class: "contact-form",
            onsubmit: onsubmit,

            div {
                class: "contact-form-row",
                for field in [Field::Name, Field::Email] {
                    FloatingField {
                        key: "{field}",
                        field: field,
                        value: snapshot.value(field).to_string(),
                        invalid: snapshot.field_invalid(field),
                        disabled: sending,
                        on_input: move |value: String| {
                            form.write().edit(field, value);
                        },
                    }
                }
            }

            for field in [Field::Subject, Field::Message] {
                FloatingField {
                    key: "{field}",
                    field: field,
                    value: snapshot.value(field).to_string(),
                    invalid: snapshot.field_invalid(field),
                    disabled: sending,
                    on_input: move |value: String| {
                        form.write().edit(field, value);
                    },
                }
            }

            button {
                class: "btn btn-primary contact-submit",
                r#type: "submit",
                disabled: sending,
                if sending {
                    span { class: "spinner", style: SPINNER.css() }
                    "Sending..."
                } else {
                    IconGlyph { icon: Icon::Send }
                    " Send Message"
                }
            }
        }
    }
}
