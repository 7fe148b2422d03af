#![doc = include_str!("../README.md")]

pub use unic_langid::{LanguageIdentifier, langid};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator as _};
use thiserror::Error;

/// Returned when a string is not one of the supported language codes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a supported language code")]
pub struct UnknownLanguage(pub String);

/// A language the site is translated into.
///
/// The set is closed: values only ever come from parsing one of the codes
/// below, so an arbitrary string can never become the active language.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Lg,
    Fr,
    Sw,
    Rw,
}

impl LanguageCode {
    /// The locale every other locale falls back to.
    pub const DEFAULT: LanguageCode = LanguageCode::En;

    /// All supported languages, in the order the selector lists them.
    pub fn all() -> impl Iterator<Item = LanguageCode> {
        LanguageCode::iter()
    }

    /// The lowercase code, also used as the persisted value and locale file stem.
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Lg => "lg",
            LanguageCode::Fr => "fr",
            LanguageCode::Sw => "sw",
            LanguageCode::Rw => "rw",
        }
    }

    /// The language's name in English.
    pub const fn english_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Lg => "Luganda",
            LanguageCode::Fr => "French",
            LanguageCode::Sw => "Swahili",
            LanguageCode::Rw => "Kinyarwanda",
        }
    }

    /// The language's name in itself, as shown in the language selector.
    pub const fn native_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Lg => "Luganda",
            LanguageCode::Fr => "Français",
            LanguageCode::Sw => "Kiswahili",
            LanguageCode::Rw => "Kinyarwanda",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            LanguageCode::En => "🇬🇧",
            LanguageCode::Lg => "🇺🇬",
            LanguageCode::Fr => "🇫🇷",
            LanguageCode::Sw => "🇹🇿",
            LanguageCode::Rw => "🇷🇼",
        }
    }

    /// Catalog key holding the localized name of this language.
    pub const fn name_key(self) -> &'static str {
        match self {
            LanguageCode::En => "language.en",
            LanguageCode::Lg => "language.lg",
            LanguageCode::Fr => "language.fr",
            LanguageCode::Sw => "language.sw",
            LanguageCode::Rw => "language.rw",
        }
    }

    pub fn is_default(self) -> bool {
        self == LanguageCode::DEFAULT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl From<LanguageCode> for LanguageIdentifier {
    fn from(code: LanguageCode) -> Self {
        match code {
            LanguageCode::En => langid!("en"),
            LanguageCode::Lg => langid!("lg"),
            LanguageCode::Fr => langid!("fr"),
            LanguageCode::Sw => langid!("sw"),
            LanguageCode::Rw => langid!("rw"),
        }
    }
}

impl TryFrom<&LanguageIdentifier> for LanguageCode {
    type Error = UnknownLanguage;

    /// Matches on the primary language subtag, so `fr-CA` selects French.
    fn try_from(lang: &LanguageIdentifier) -> Result<Self, Self::Error> {
        lang.language
            .as_str()
            .parse()
            .map_err(|_| UnknownLanguage(lang.to_string()))
    }
}
