#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod context;
mod error;
pub mod store;

pub use catalog::{Catalog, Coverage, Dictionary};
pub use context::{LanguageContext, Translator};
pub use error::{CatalogError, StoreError};
pub use store::{FileStore, LANGUAGE_KEY, LanguageStore, MemoryStore};

#[doc(hidden)]
pub use virtuscope_lang::LanguageCode;
