use thiserror::Error;
use virtuscope_lang::LanguageCode;

/// An error while building a [`Catalog`](crate::Catalog) from locale sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The default locale must always be present; every other locale falls back to it.
    #[error("the default locale '{0}' is missing from the catalog")]
    MissingDefaultLocale(LanguageCode),
    /// A locale file is named after a language outside the supported set.
    #[error("locale file '{0}' does not name a supported language")]
    UnknownLocaleFile(String),
    /// A locale file is not valid UTF-8.
    #[error("locale file '{path}' is not valid UTF-8")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// A locale file is not a flat JSON object of strings.
    #[error("failed to parse locale '{language}': {source}")]
    Parse {
        language: LanguageCode,
        #[source]
        source: serde_json::Error,
    },
    /// Empty strings are rejected so that a present key never renders as blank.
    #[error("key '{key}' in locale '{language}' has an empty translation")]
    EmptyValue { language: LanguageCode, key: String },
    /// The same locale was provided twice.
    #[error("locale '{0}' was provided more than once")]
    DuplicateLocale(LanguageCode),
}

/// An error while persisting a value to a [`LanguageStore`](crate::LanguageStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
