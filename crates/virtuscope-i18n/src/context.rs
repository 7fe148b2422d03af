//! The active language, injected into whatever renders translated text.

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::store::{LANGUAGE_KEY, LanguageStore};
use std::cell::OnceCell;
use std::sync::Arc;
use virtuscope_lang::LanguageCode;

/// A language paired with the catalog it resolves against.
///
/// This is what components receive instead of reaching for global state.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    language: LanguageCode,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a Catalog, language: LanguageCode) -> Self {
        Self { catalog, language }
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolves `key` in this translator's language, with fallback.
    pub fn t(&self, key: &'a str) -> &'a str {
        self.catalog.resolve(self.language, key)
    }
}

/// Owns the session's active language and where it is persisted.
///
/// The stored preference is read lazily, exactly once per context. After that
/// the in-memory value is authoritative and every change is written through to
/// the store.
pub struct LanguageContext<S> {
    catalog: Arc<Catalog>,
    store: S,
    active: OnceCell<LanguageCode>,
}

impl<S: LanguageStore> LanguageContext<S> {
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            active: OnceCell::new(),
        }
    }

    /// Returns the active language, restoring it from the store on first use.
    pub fn active_language(&self) -> LanguageCode {
        *self.active.get_or_init(|| self.restore())
    }

    /// Makes `language` the active language and persists it.
    ///
    /// A failed write is logged; the in-memory selection still takes effect.
    pub fn set_active_language(&mut self, language: LanguageCode) {
        if let Err(e) = self.try_set_active_language(language) {
            tracing::error!("Failed to persist language '{}': {}", language, e);
        }
    }

    /// Like [`set_active_language`](Self::set_active_language), but hands the
    /// store error back to the caller.
    pub fn try_set_active_language(&mut self, language: LanguageCode) -> Result<(), StoreError> {
        self.active = OnceCell::from(language);
        tracing::debug!("Active language set to '{}'", language);
        self.store.set(LANGUAGE_KEY, language.as_str())
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.catalog, self.active_language())
    }

    /// Resolves `key` in the active language.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.resolve(self.active_language(), key)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn restore(&self) -> LanguageCode {
        match self.store.get(LANGUAGE_KEY) {
            Some(stored) => match stored.parse::<LanguageCode>() {
                Ok(language) => {
                    tracing::debug!("Restored language preference '{}'", language);
                    language
                },
                Err(e) => {
                    tracing::debug!("Ignoring stored language preference: {}", e);
                    LanguageCode::DEFAULT
                },
            },
            None => LanguageCode::DEFAULT,
        }
    }
}
