use std::cell::Cell;
use std::time::Duration;
use tokio::time::Instant;
use virtuscope_contact::{
    Ack, ContactError, ContactForm, ContactFormInput, Field, SimulatedTransport, SubmissionOutcome,
    SubmissionState, Transport, TransportError,
};

const DELAY: Duration = Duration::from_secs(2);

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Aime").unwrap();
    form.set_field(Field::Email, "aime@virtuscope.me").unwrap();
    form.set_field(Field::PhoneNumber, "+256 700 000 000").unwrap();
    form.set_field(Field::Message, "We would like a VR tour of our hotel.").unwrap();
    form
}

/// Counts how many messages actually reach the endpoint.
#[derive(Default)]
struct CountingTransport {
    inner: SimulatedTransport,
    delivered: Cell<usize>,
}

impl Transport for CountingTransport {
    async fn deliver(&self, input: &ContactFormInput) -> Result<Ack, TransportError> {
        let ack = self.inner.deliver(input).await?;
        self.delivered.set(self.delivered.get() + 1);
        Ok(ack)
    }
}

/// Fails the first `failures` deliveries, then succeeds.
struct FlakyTransport {
    failures: Cell<usize>,
}

impl Transport for FlakyTransport {
    async fn deliver(&self, input: &ContactFormInput) -> Result<Ack, TransportError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(TransportError::Unreachable("connection reset".to_string()));
        }
        Ok(Ack {
            id: 7,
            email: input.email.clone(),
        })
    }
}

#[tokio::test(start_paused = true)]
async fn valid_submission_resets_the_form_after_the_delay() {
    let transport = SimulatedTransport::new(DELAY);
    let mut form = filled_form();

    let submission = form.begin_submit().unwrap();
    assert_eq!(form.state(), SubmissionState::Submitting);
    assert_eq!(form.submit_label_key(), "contact.form.sending");
    assert_eq!(submission.input().name, "Aime");

    let started = Instant::now();
    let completion = submission.send(&transport).await;
    assert!(started.elapsed() >= DELAY);

    form.finish(completion);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(form.input().is_empty());
    assert_eq!(form.last_ack().map(|ack| ack.email.as_str()), Some("aime@virtuscope.me"));
    assert_eq!(form.status_key(), Some("contact.form.success"));
    assert_eq!(form.submit_label_key(), "contact.form.submit");
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_submitting_is_a_no_op() {
    let transport = CountingTransport::default();
    let mut form = filled_form();

    let submission = form.begin_submit().unwrap();
    assert!(matches!(form.begin_submit(), Err(ContactError::Busy)));
    assert!(matches!(
        form.set_field(Field::Name, "Someone else"),
        Err(ContactError::Busy)
    ));

    let completion = submission.send(&transport).await;
    form.finish(completion);

    assert_eq!(transport.delivered.get(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn failed_delivery_keeps_the_input_for_a_retry() {
    let transport = FlakyTransport {
        failures: Cell::new(1),
    };
    let mut form = filled_form();
    let before = form.input().clone();

    let outcome = form.submit(&transport).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
    assert_eq!(form.state(), SubmissionState::Failed);
    assert_eq!(form.input(), &before);
    assert_eq!(form.status_key(), Some("contact.form.error.transport"));
    assert!(form.last_error().is_some());

    let outcome = form.submit(&transport).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Delivered(Ack { id: 7, .. })));
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(form.input().is_empty());
}

#[tokio::test(start_paused = true)]
async fn editing_after_a_failure_returns_to_idle() {
    let transport = FlakyTransport {
        failures: Cell::new(1),
    };
    let mut form = filled_form();
    form.submit(&transport).await.unwrap();
    assert_eq!(form.state(), SubmissionState::Failed);

    form.set_field(Field::Message, "Updated message for the team.").unwrap();
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.status_key(), None);
}

#[tokio::test(start_paused = true)]
async fn cancelling_aborts_the_send_and_keeps_the_input() {
    let transport = CountingTransport::default();
    let mut form = filled_form();
    let before = form.input().clone();

    let submission = form.begin_submit().unwrap();
    let mut send = std::pin::pin!(submission.send(&transport));
    assert!(futures::poll!(send.as_mut()).is_pending());

    form.cancel();
    assert_eq!(form.state(), SubmissionState::Idle);

    let completion = send.await;
    assert_eq!(completion.outcome(), &SubmissionOutcome::Cancelled);
    form.finish(completion);

    assert_eq!(transport.delivered.get(), 0);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.input(), &before);
    assert_eq!(form.last_ack(), None);
}

#[tokio::test(start_paused = true)]
async fn completion_of_a_superseded_submission_is_ignored() {
    let transport = SimulatedTransport::new(DELAY);
    let mut form = filled_form();

    let first = form.begin_submit().unwrap();
    form.cancel();
    let second = form.begin_submit().unwrap();

    // The first send was aborted, but even a late result must not touch the new submission.
    let stale = first.send(&transport).await;
    form.finish(stale);
    assert_eq!(form.state(), SubmissionState::Submitting);

    let completion = second.send(&transport).await;
    form.finish(completion);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(form.input().is_empty());
}

#[tokio::test(start_paused = true)]
async fn simulated_transport_numbers_acknowledgments() {
    let transport = SimulatedTransport::new(Duration::from_millis(10));
    let input = filled_form().input().clone();

    let first = transport.deliver(&input).await.unwrap();
    let second = transport.deliver(&input).await.unwrap();
    assert_eq!(first.id + 1, second.id);
    assert_eq!(second.email, "aime@virtuscope.me");
}

#[tokio::test(start_paused = true)]
async fn dropping_submit_mid_send_returns_to_idle() {
    let transport = CountingTransport::default();
    assert_eq!(transport.inner.delay(), DELAY);
    let mut form = filled_form();
    let before = form.input().clone();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(10), form.submit(&transport)).await;
    assert!(timed_out.is_err());

    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.input(), &before);
    assert!(form.last_ack().is_none());
    assert_eq!(transport.delivered.get(), 0);

    form.set_field(Field::Name, "Aimé").unwrap();
    let outcome = form.submit(&transport).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Delivered(_)));
    assert_eq!(transport.delivered.get(), 1);
}
