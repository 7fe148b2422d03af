//! The submission state machine and the transports it sends through.

use crate::form::{ContactFormInput, Field};
use crate::validation::{FieldError, ValidationReport, validate, validate_field};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Default delay of [`SimulatedTransport`].
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmissionState {
    /// Accepting input.
    #[default]
    Idle,
    /// A submission is in flight; input is locked.
    Submitting,
    /// The last submission failed; input was kept for a retry.
    Failed,
}

/// Acknowledgment returned by the endpoint for a delivered message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ack {
    pub id: u64,
    pub email: String,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TransportError {
    #[error("could not reach the contact endpoint: {0}")]
    Unreachable(String),
    #[error("the contact endpoint rejected the message: {0}")]
    Rejected(String),
}

/// Delivers a validated contact message.
pub trait Transport {
    fn deliver(&self, input: &ContactFormInput) -> impl Future<Output = Result<Ack, TransportError>>;
}

/// Stands in for a real endpoint: waits a fixed delay, then acknowledges.
#[derive(Debug)]
pub struct SimulatedTransport {
    delay: Duration,
    next_id: AtomicU64,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Transport for SimulatedTransport {
    async fn deliver(&self, input: &ContactFormInput) -> Result<Ack, TransportError> {
        tokio::time::sleep(self.delay).await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            "Contact message #{} delivered from {} <{}>",
            id,
            input.name,
            input.email
        );
        Ok(Ack {
            id,
            email: input.email.clone(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("the form has {} invalid field(s)", .0.error_count())]
    Invalid(ValidationReport),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
    Delivered(Ack),
    Failed(TransportError),
    /// The send was aborted before the transport answered.
    Cancelled,
}

/// A finished send, tagged with the submission it belongs to.
#[derive(Debug)]
pub struct Completion {
    generation: u64,
    outcome: SubmissionOutcome,
}

impl Completion {
    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }
}

/// An accepted submission, waiting to be sent.
///
/// Holds a snapshot of the input taken when validation passed.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    input: ContactFormInput,
    registration: AbortRegistration,
}

impl Submission {
    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    /// Sends the snapshot. Resolves to [`SubmissionOutcome::Cancelled`] if the
    /// form is cancelled first.
    pub async fn send<T: Transport>(self, transport: &T) -> Completion {
        let Submission {
            generation,
            input,
            registration,
        } = self;

        let outcome = match Abortable::new(transport.deliver(&input), registration).await {
            Ok(Ok(ack)) => SubmissionOutcome::Delivered(ack),
            Ok(Err(e)) => SubmissionOutcome::Failed(e),
            Err(_aborted) => SubmissionOutcome::Cancelled,
        };

        Completion {
            generation,
            outcome,
        }
    }
}

/// What to show under the submit button after a submission settles.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Notice {
    Sent(Ack),
    Failed(TransportError),
}

/// Returns the form to `Idle` if a [`ContactForm::submit`] future is dropped
/// before the send settles.
struct CancelOnDrop<'a> {
    form: &'a mut ContactForm,
    armed: bool,
}

impl Drop for CancelOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.form.cancel();
        }
    }
}

/// Contact form state: the input, its validation, and the submission lifecycle.
#[derive(Debug, Default)]
pub struct ContactForm {
    input: ContactFormInput,
    state: SubmissionState,
    generation: u64,
    in_flight: Option<AbortHandle>,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Updates one field. Refused while a submission is in flight.
    ///
    /// Editing after a failure returns the form to `Idle`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.input.set(field, value);
        self.notice = None;
        if self.state == SubmissionState::Failed {
            self.state = SubmissionState::Idle;
        }
        Ok(())
    }

    /// Live validation of one field against its current value.
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        validate_field(field, self.input.get(field)).err()
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.input)
    }

    /// Validates every field and, if all pass, moves to `Submitting`.
    ///
    /// Nothing changes when validation fails or a submission is already in
    /// flight.
    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(ContactError::Busy);
        }

        let report = self.validate();
        if !report.is_valid() {
            return Err(ContactError::Invalid(report));
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.generation += 1;
        self.in_flight = Some(handle);
        self.state = SubmissionState::Submitting;
        self.notice = None;

        Ok(Submission {
            generation: self.generation,
            input: self.input.clone(),
            registration,
        })
    }

    /// Applies a finished send.
    ///
    /// Completions of a submission that was cancelled or superseded are ignored.
    pub fn finish(&mut self, completion: Completion) {
        if !self.is_submitting() || completion.generation != self.generation {
            tracing::debug!("Ignoring stale submission #{}", completion.generation);
            return;
        }

        self.in_flight = None;
        match completion.outcome {
            SubmissionOutcome::Delivered(ack) => {
                self.input.clear();
                self.state = SubmissionState::Idle;
                self.notice = Some(Notice::Sent(ack));
            },
            SubmissionOutcome::Failed(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.state = SubmissionState::Failed;
                self.notice = Some(Notice::Failed(e));
            },
            SubmissionOutcome::Cancelled => {
                self.state = SubmissionState::Idle;
            },
        }
    }

    /// Aborts the in-flight send, if any, keeping the input.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        if self.is_submitting() {
            tracing::debug!("Cancelled submission #{}", self.generation);
            self.state = SubmissionState::Idle;
        }
    }

    /// Validates, sends and applies the result in one go.
    ///
    /// Dropping the returned future mid-send cancels the submission.
    pub async fn submit<T: Transport>(
        &mut self,
        transport: &T,
    ) -> Result<SubmissionOutcome, ContactError> {
        let submission = self.begin_submit()?;
        let mut guard = CancelOnDrop {
            form: self,
            armed: true,
        };
        let completion = submission.send(transport).await;
        guard.armed = false;
        let outcome = completion.outcome.clone();
        guard.form.finish(completion);
        Ok(outcome)
    }

    /// The acknowledgment of the last delivered message, until the next edit.
    pub fn last_ack(&self) -> Option<&Ack> {
        match &self.notice {
            Some(Notice::Sent(ack)) => Some(ack),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&TransportError> {
        match &self.notice {
            Some(Notice::Failed(e)) => Some(e),
            _ => None,
        }
    }

    /// Catalog key of the submit button's label.
    pub fn submit_label_key(&self) -> &'static str {
        if self.is_submitting() {
            "contact.form.sending"
        } else {
            "contact.form.submit"
        }
    }

    /// Catalog key of the message shown after a submission settles.
    pub fn status_key(&self) -> Option<&'static str> {
        match self.notice {
            Some(Notice::Sent(_)) => Some("contact.form.success"),
            Some(Notice::Failed(_)) => Some("contact.form.error.transport"),
            None => None,
        }
    }
}
