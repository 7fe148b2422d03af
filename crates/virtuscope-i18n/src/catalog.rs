//! The per-locale translation dictionaries and the fallback resolver.

use crate::error::CatalogError;
use indexmap::IndexMap;
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use virtuscope_lang::LanguageCode;

/// A flat `key -> string` dictionary for one locale, in file order.
pub type Dictionary = IndexMap<String, String>;

/// Locale files compiled into the binary.
#[derive(RustEmbed)]
#[folder = "locales/"]
struct EmbeddedLocales;

/// The complete set of per-locale dictionaries.
///
/// A catalog always contains the default locale; it is built once and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionaries: BTreeMap<LanguageCode, Dictionary>,
    warn_missing_keys: bool,
}

/// How much of the default locale a language translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub language: LanguageCode,
    pub translated: usize,
    pub total: usize,
}

impl Coverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.translated as f64 * 100.0 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.translated == self.total
    }
}

impl Catalog {
    /// Returns the catalog built from the locale files embedded in this crate.
    pub fn embedded() -> Arc<Catalog> {
        static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
        CATALOG
            .get_or_init(|| {
                Arc::new(
                    Catalog::load_embedded()
                        .expect("Invalid locale file embedded in virtuscope-i18n/locales"),
                )
            })
            .clone()
    }

    /// Builds a fresh catalog from the embedded locale files.
    pub fn load_embedded() -> Result<Catalog, CatalogError> {
        Catalog::from_assets::<EmbeddedLocales>()
    }

    /// Builds a catalog from every `<code>.json` file of an embedded asset folder.
    pub fn from_assets<A: RustEmbed>() -> Result<Catalog, CatalogError> {
        let mut sources = Vec::new();

        for file_path in A::iter() {
            let Some(stem) = file_path.strip_suffix(".json") else {
                continue;
            };
            let language = stem
                .parse::<LanguageCode>()
                .map_err(|_| CatalogError::UnknownLocaleFile(file_path.to_string()))?;

            let Some(file) = A::get(&file_path) else {
                continue;
            };
            let content = String::from_utf8(file.data.into_owned()).map_err(|source| {
                CatalogError::InvalidUtf8 {
                    path: file_path.to_string(),
                    source,
                }
            })?;

            sources.push((language, content));
        }

        Catalog::from_sources(sources)
    }

    /// Builds a catalog from JSON sources, one flat object of strings per locale.
    pub fn from_sources<I, S>(sources: I) -> Result<Catalog, CatalogError>
    where
        I: IntoIterator<Item = (LanguageCode, S)>,
        S: AsRef<str>,
    {
        let mut dictionaries = BTreeMap::new();

        for (language, source) in sources {
            let dictionary: Dictionary = serde_json::from_str(source.as_ref())
                .map_err(|source| CatalogError::Parse { language, source })?;

            if let Some((key, _)) = dictionary.iter().find(|(_, value)| value.is_empty()) {
                return Err(CatalogError::EmptyValue {
                    language,
                    key: key.clone(),
                });
            }

            if dictionaries.insert(language, dictionary).is_some() {
                return Err(CatalogError::DuplicateLocale(language));
            }
        }

        if !dictionaries.contains_key(&LanguageCode::DEFAULT) {
            return Err(CatalogError::MissingDefaultLocale(LanguageCode::DEFAULT));
        }

        tracing::debug!("Loaded translation catalog with {} locales", dictionaries.len());

        Ok(Catalog {
            dictionaries,
            warn_missing_keys: true,
        })
    }

    /// Enables or disables the debug-build warning emitted when a key resolves to itself.
    pub fn with_missing_key_warnings(mut self, enabled: bool) -> Self {
        self.warn_missing_keys = enabled;
        self
    }

    /// Looks `key` up in `language` only, without any fallback.
    pub fn lookup(&self, language: LanguageCode, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
    }

    /// Returns the best available string for `key` in `language`.
    ///
    /// Falls back to the default locale, then to `key` itself.
    pub fn resolve<'a>(&'a self, language: LanguageCode, key: &'a str) -> &'a str {
        if let Some(value) = self.lookup(language, key) {
            return value;
        }

        if !language.is_default()
            && let Some(value) = self.lookup(LanguageCode::DEFAULT, key)
        {
            tracing::debug!(
                "Translation for '{}' missing in '{}', using '{}'",
                key,
                language,
                LanguageCode::DEFAULT
            );
            return value;
        }

        if cfg!(debug_assertions) && self.warn_missing_keys {
            tracing::warn!("Translation for '{}' not found in '{}'", key, language);
        }
        key
    }

    pub fn dictionary(&self, language: LanguageCode) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Languages with a dictionary in this catalog, default locale first.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.dictionaries.keys().copied()
    }

    /// Every key of the default locale, in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.default_dictionary().keys().map(String::as_str)
    }

    /// Keys of the default locale that `language` does not translate.
    pub fn missing_keys(&self, language: LanguageCode) -> Vec<&str> {
        let dictionary = self.dictionaries.get(&language);
        self.keys()
            .filter(|key| !dictionary.is_some_and(|dictionary| dictionary.contains_key(*key)))
            .collect()
    }

    /// Keys that `language` defines but the default locale does not.
    ///
    /// These can never be reached through the fallback chain and usually point
    /// at a typo or a key that was renamed in English only.
    pub fn orphan_keys(&self, language: LanguageCode) -> Vec<&str> {
        let default = self.default_dictionary();
        self.dictionaries
            .get(&language)
            .map(|dictionary| {
                dictionary
                    .keys()
                    .filter(|key| !default.contains_key(*key))
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn coverage(&self, language: LanguageCode) -> Coverage {
        let total = self.default_dictionary().len();
        Coverage {
            language,
            translated: total - self.missing_keys(language).len(),
            total,
        }
    }

    fn default_dictionary(&self) -> &Dictionary {
        // Guaranteed by construction.
        &self.dictionaries[&LanguageCode::DEFAULT]
    }
}
