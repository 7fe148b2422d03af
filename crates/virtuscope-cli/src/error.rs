//! CLI errors, rendered as miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;
use virtuscope_contact::{ContactError, TransportError};
use virtuscope_i18n::{CatalogError, StoreError};
use virtuscope_toml::SiteConfigError;

/// A language code outside the supported set was given on the command line.
#[derive(Debug, Diagnostic, Error)]
#[error("'{code}' is not a supported language")]
#[diagnostic(
    code(virtuscope::unknown_language),
    help("Supported languages: {available}")
)]
pub struct UnknownLanguageError {
    pub code: String,
    /// Comma-separated list of supported codes.
    pub available: String,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownLanguage(#[from] UnknownLanguageError),

    #[error(transparent)]
    #[diagnostic(
        code(virtuscope::config),
        help("Check virtuscope.toml, or the file named by --config or VIRTUSCOPE_CONFIG")
    )]
    Config(#[from] SiteConfigError),

    #[error(transparent)]
    #[diagnostic(code(virtuscope::catalog))]
    Catalog(#[from] CatalogError),

    #[error("failed to save the language preference")]
    #[diagnostic(code(virtuscope::store))]
    Store(#[from] StoreError),

    #[error("{count} locale key(s) do not exist in the default locale")]
    #[diagnostic(
        code(virtuscope::check::unknown_keys),
        help("Remove the keys, or add them to the default locale first")
    )]
    UnknownKeys { count: usize },

    #[error("the contact form has {count} invalid field(s)")]
    #[diagnostic(code(virtuscope::contact::invalid))]
    InvalidForm { count: usize },

    #[error(transparent)]
    #[diagnostic(code(virtuscope::contact))]
    Contact(#[from] ContactError),

    #[error(transparent)]
    #[diagnostic(code(virtuscope::contact::delivery), help("Try sending the message again"))]
    Delivery(#[from] TransportError),

    #[error("sending was cancelled")]
    #[diagnostic(code(virtuscope::contact::cancelled))]
    Cancelled,

    #[error("IO error: {0}")]
    #[diagnostic(code(virtuscope::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(virtuscope::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}
