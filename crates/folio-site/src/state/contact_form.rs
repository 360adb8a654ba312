//! Contact form fields and the simulated submission cycle.
//!
//! Status moves `Idle -> Sending -> Sent -> Idle`. Nothing is sent over the
//! network; [`run_delivery`] only waits out two fixed delays. Each accepted
//! submit hands out a [`Ticket`], and [`ContactForm::advance`] ignores
//! tickets from an older epoch, so a timer that outlives its form can never
//! change it.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Delay before a submission counts as delivered.
pub const SEND_DELAY: Duration = Duration::from_millis(1400);

/// How long the confirmation stays up before the form returns.
pub const RESET_DELAY: Duration = Duration::from_millis(3500);

/// Submission status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// The four required fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Returns the input `name`/`id` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Returns the floating label text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    /// Returns the HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a submit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A required field is blank
    #[error("Required field is empty: {0}")]
    MissingField(Field),

    /// A submission is already in flight
    #[error("A message is already being sent")]
    AlreadySending,

    /// The confirmation is still showing
    #[error("The previous message confirmation is still showing")]
    NotReady,
}

/// Proof that a submit was accepted, scoped to one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// A timed step of the submission cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// `Sending -> Sent`; clears the fields.
    Delivered,
    /// `Sent -> Idle`.
    Reset,
}

/// Delays for the simulated round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTiming {
    pub send_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self {
            send_delay: SEND_DELAY,
            reset_delay: RESET_DELAY,
        }
    }
}

/// Snapshot of what a backend would receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Form fields plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    status: SubmitStatus,
    attempted: bool,
    epoch: u64,
}

impl ContactForm {
    /// Creates an empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Returns whether a submission is in flight.
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Returns the value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Updates one field. Ignored while sending; returns whether it applied.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_sending() {
            return false;
        }
        *self.value_mut(field) = value.into();
        true
    }

    /// Returns true when `field` should show required-field feedback.
    pub fn field_invalid(&self, field: Field) -> bool {
        self.attempted && self.value(field).is_empty()
    }

    /// Returns the first empty required field, if any. Whitespace counts as
    /// a value, as with a native `required` input.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Returns the payload for the current fields.
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Starts a submission.
    ///
    /// Only an idle form with every field filled moves to `Sending`.
    pub fn submit(&mut self) -> Result<Ticket, SubmitError> {
        match self.status {
            SubmitStatus::Sending => return Err(SubmitError::AlreadySending),
            SubmitStatus::Sent => return Err(SubmitError::NotReady),
            SubmitStatus::Idle => {}
        }

        if let Some(field) = self.missing_field() {
            self.attempted = true;
            return Err(SubmitError::MissingField(field));
        }

        match serde_json::to_string(&self.submission()) {
            Ok(payload) => tracing::debug!(%payload, "Contact submission prepared"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize contact submission"),
        }

        self.status = SubmitStatus::Sending;
        self.epoch += 1;
        tracing::info!("Contact message accepted");
        Ok(Ticket { epoch: self.epoch })
    }

    /// Applies a timed stage. Stale tickets and out-of-order stages are
    /// ignored; returns whether the stage applied.
    pub fn advance(&mut self, ticket: Ticket, stage: Stage) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(?stage, "Ignoring stale submission ticket");
            return false;
        }

        match (self.status, stage) {
            (SubmitStatus::Sending, Stage::Delivered) => {
                self.status = SubmitStatus::Sent;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.attempted = false;
                tracing::info!("Contact message delivered");
                true
            }
            (SubmitStatus::Sent, Stage::Reset) => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Invalidates every outstanding ticket.
    pub fn teardown(&mut self) {
        self.epoch += 1;
    }
}

/// Waits out the simulated round trip, applying each stage through `apply`.
///
/// Stops early when `apply` returns false (the form is gone or the ticket
/// went stale). Returns whether the full cycle completed.
pub async fn run_delivery<F>(timing: SubmitTiming, mut apply: F) -> bool
where
    F: FnMut(Stage) -> bool,
{
    tokio::time::sleep(timing.send_delay).await;
    if !apply(Stage::Delivered) {
        return false;
    }

    tokio::time::sleep(timing.reset_delay).await;
    apply(Stage::Reset)
}

/// Returns whether a floating label sits above its input.
pub fn label_floats(focused: bool, value: &str) -> bool {
    focused || !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Subject, "Hello");
        form.edit(Field::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_full_cycle() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert_eq!(form.name, "Ada");

        assert!(form.advance(ticket, Stage::Delivered));
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert!(Field::ALL.iter().all(|f| form.value(*f).is_empty()));

        assert!(form.advance(ticket, Stage::Reset));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_blank_field_stays_idle() {
        for blank in Field::ALL {
            let mut form = filled();
            form.edit(blank, "");
            assert_eq!(form.submit(), Err(SubmitError::MissingField(blank)));
            assert_eq!(form.status(), SubmitStatus::Idle);
            assert!(form.field_invalid(blank));
        }
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut form = filled();
        form.edit(Field::Subject, " ");
        assert_eq!(form.missing_field(), None);
        assert!(form.submit().is_ok());
        assert_eq!(form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn test_resubmit_while_sending_is_ignored() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::AlreadySending));
        assert_eq!(form.status(), SubmitStatus::Sending);

        // The original ticket still completes the cycle.
        assert!(form.advance(ticket, Stage::Delivered));
    }

    #[test]
    fn test_edits_ignored_while_sending() {
        let mut form = filled();
        form.submit().unwrap();
        assert!(!form.edit(Field::Name, "Grace"));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_submit_while_sent_is_refused() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.advance(ticket, Stage::Delivered);
        assert_eq!(form.submit(), Err(SubmitError::NotReady));
    }

    #[test]
    fn test_out_of_order_stage_ignored() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert!(!form.advance(ticket, Stage::Reset));
        assert_eq!(form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn test_teardown_invalidates_ticket() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        form.teardown();
        let before = form.clone();
        assert!(!form.advance(ticket, Stage::Delivered));
        assert_eq!(form, before);
    }

    #[test]
    fn test_old_ticket_cannot_touch_next_cycle() {
        let mut form = filled();
        let first = form.submit().unwrap();
        form.advance(first, Stage::Delivered);
        form.advance(first, Stage::Reset);

        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Subject, "Again");
        form.edit(Field::Message, "Second message");
        let _second = form.submit().unwrap();
        assert!(!form.advance(first, Stage::Delivered));
        assert_eq!(form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn test_attempted_flag_cleared_on_delivery() {
        let mut form = filled();
        form.edit(Field::Subject, "");
        assert!(form.submit().is_err());
        form.edit(Field::Subject, "Hello");
        assert!(!form.field_invalid(Field::Subject));

        let ticket = form.submit().unwrap();
        form.advance(ticket, Stage::Delivered);
        assert!(!form.field_invalid(Field::Name));
    }

    #[test]
    fn test_submission_is_trimmed_json() {
        let mut form = filled();
        form.edit(Field::Name, "  Ada ");
        let json = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_label_floats() {
        assert!(!label_floats(false, ""));
        assert!(label_floats(true, ""));
        assert!(label_floats(false, "x"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmitError::MissingField(Field::Email).to_string(),
            "Required field is empty: email"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_delivery_applies_stages_in_order() {
        let mut stages = Vec::new();
        let completed = run_delivery(SubmitTiming::default(), |stage| {
            stages.push(stage);
            true
        })
        .await;
        assert!(completed);
        assert_eq!(stages, vec![Stage::Delivered, Stage::Reset]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_delivery_stops_when_rejected() {
        let mut calls = 0;
        let completed = run_delivery(SubmitTiming::default(), |_| {
            calls += 1;
            false
        })
        .await;
        assert!(!completed);
        assert_eq!(calls, 1);
    }
}
