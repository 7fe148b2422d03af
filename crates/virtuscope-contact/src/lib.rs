#![doc = include_str!("../README.md")]

pub mod form;
pub mod submission;
pub mod validation;

pub use form::{ContactFormInput, Field};
pub use submission::{
    Ack, Completion, ContactError, ContactForm, DEFAULT_SUBMIT_DELAY, SimulatedTransport,
    Submission, SubmissionOutcome, SubmissionState, Transport, TransportError,
};
pub use validation::{FieldError, ValidationReport, validate, validate_field};
