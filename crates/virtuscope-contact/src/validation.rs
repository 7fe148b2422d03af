//! Per-field validation rules.

use crate::form::{ContactFormInput, Field};
use email_address::EmailAddress;
use thiserror::Error;
use virtuscope_i18n::Translator;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Why a field's value was rejected.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FieldError {
    #[error("too short (at least {min} characters)")]
    TooShort { min: usize },
    #[error("not a valid email")]
    InvalidEmail,
}

/// Checks one field's value against its rule.
///
/// Lengths count characters, not bytes, and whitespace is not trimmed.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => min_length(value, MIN_NAME_LEN),
        Field::Email if is_valid_email(value) => Ok(()),
        Field::Email => Err(FieldError::InvalidEmail),
        Field::PhoneNumber => min_length(value, MIN_PHONE_LEN),
        Field::Message => min_length(value, MIN_MESSAGE_LEN),
    }
}

/// Validates every field of `input` independently.
pub fn validate(input: &ContactFormInput) -> ValidationReport {
    let mut errors: [Option<FieldError>; 4] = Default::default();
    for field in Field::all() {
        errors[field.index()] = validate_field(field, input.get(field)).err();
    }
    ValidationReport { errors }
}

fn min_length(value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(FieldError::TooShort { min })
    }
}

/// Accepts `local@domain` where the domain has at least one dot.
///
/// Parsing is delegated to `email_address`; display-name forms such as
/// `Jane <jane@example.com>` are not accepted in a plain input field.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }

    match value.parse::<EmailAddress>() {
        Ok(address) => {
            let domain = address.domain();
            domain.contains('.') && !domain.starts_with('[')
        },
        Err(_) => false,
    }
}

/// The outcome of validating a whole form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationReport {
    errors: [Option<FieldError>; 4],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors[field.index()].as_ref()
    }

    /// Invalid fields with their errors, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        Field::all().filter_map(|field| self.error(field).map(|error| (field, error)))
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().flatten().count()
    }

    /// Inline messages for the invalid fields, in the translator's language.
    pub fn messages<'a>(&self, translator: &Translator<'a>) -> Vec<(Field, &'a str)> {
        self.errors()
            .map(|(field, _)| (field, translator.t(field.error_key())))
            .collect()
    }
}
