use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::ui;
use anyhow::Context as _;
use clap::Parser;
use std::time::Duration;
use virtuscope_contact::{
    Completion, ContactError, ContactForm, Field, SimulatedTransport, Submission,
    SubmissionOutcome,
};

#[derive(Debug, Parser)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: String,

    /// Simulated delivery time in milliseconds, overriding `contact.submit_delay_ms`.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub fn run_contact(site_args: &SiteArgs, args: ContactArgs) -> Result<(), CliError> {
    let site = Site::load(site_args)?;
    let translator = site.ctx.translator();

    let mut form = ContactForm::new();
    form.set_field(Field::Name, args.name)?;
    form.set_field(Field::Email, args.email)?;
    form.set_field(Field::PhoneNumber, args.phone)?;
    form.set_field(Field::Message, args.message)?;

    let submission = match form.begin_submit() {
        Ok(submission) => submission,
        Err(ContactError::Invalid(report)) => {
            for (field, message) in report.messages(&translator) {
                ui::print_field_error(translator.t(field.label_key()), message);
            }
            return Err(CliError::InvalidForm {
                count: report.error_count(),
            });
        },
        Err(e) => return Err(e.into()),
    };

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| site.config.submit_delay());
    let transport = SimulatedTransport::new(delay);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    ui::print_sending(translator.t(form.submit_label_key()));
    let completion = runtime.block_on(send_or_cancel(&mut form, submission, &transport));
    let outcome = completion.outcome().clone();
    form.finish(completion);

    match outcome {
        SubmissionOutcome::Delivered(ack) => {
            if let Some(key) = form.status_key() {
                ui::print_delivered(translator.t(key), ack.id);
            }
            Ok(())
        },
        SubmissionOutcome::Failed(e) => Err(e.into()),
        SubmissionOutcome::Cancelled => Err(CliError::Cancelled),
    }
}

/// Sends the submission, cancelling it on Ctrl-C.
async fn send_or_cancel(
    form: &mut ContactForm,
    submission: Submission,
    transport: &SimulatedTransport,
) -> Completion {
    let send = submission.send(transport);
    tokio::pin!(send);

    tokio::select! {
        completion = &mut send => completion,
        _ = tokio::signal::ctrl_c() => {
            form.cancel();
            send.await
        }
    }
}
