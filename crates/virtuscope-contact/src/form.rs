use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator as _};

/// One of the contact form's inputs.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
    Message,
}

impl Field {
    /// All fields, in the order the form lays them out.
    pub fn all() -> impl Iterator<Item = Field> {
        Field::iter()
    }

    /// The form control name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Message => "message",
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.name",
            Field::Email => "contact.form.email",
            Field::PhoneNumber => "contact.form.phone",
            Field::Message => "contact.form.message",
        }
    }

    pub const fn placeholder_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.name.placeholder",
            Field::Email => "contact.form.email.placeholder",
            Field::PhoneNumber => "contact.form.phone.placeholder",
            Field::Message => "contact.form.message.placeholder",
        }
    }

    /// Catalog key of the inline message shown when this field is invalid.
    pub const fn error_key(self) -> &'static str {
        match self {
            Field::Name => "contact.form.error.name",
            Field::Email => "contact.form.error.email",
            Field::PhoneNumber => "contact.form.error.phone",
            Field::Message => "contact.form.error.message",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::PhoneNumber => 2,
            Field::Message => 3,
        }
    }
}

/// What the user has typed into the contact form.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Resets every field to an empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::all().all(|field| self.get(field).is_empty())
    }
}
