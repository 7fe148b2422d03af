mod check;
mod contact;
mod lang;
mod translate;

pub use check::{CheckArgs, run_check};
pub use contact::{ContactArgs, run_contact};
pub use lang::{LangArgs, LangCommand, run_lang};
pub use translate::{TranslateArgs, run_translate};

use crate::error::{CliError, UnknownLanguageError};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use virtuscope_i18n::{Catalog, FileStore, LanguageContext};
use virtuscope_lang::LanguageCode;
use virtuscope_toml::SiteConfig;

/// Where the site's settings and saved preference live.
#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Path to the configuration file (defaults to ./virtuscope.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path of the language preference file, overriding `store_path`.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

/// Everything a command needs: configuration and the language context.
pub struct Site {
    pub config: SiteConfig,
    pub store_path: PathBuf,
    pub ctx: LanguageContext<FileStore>,
}

impl Site {
    pub fn load(args: &SiteArgs) -> Result<Self, CliError> {
        let (config, base_dir) = match &args.config {
            Some(path) => (
                SiteConfig::read_from_path(path)?,
                path.parent().map(Path::to_path_buf).unwrap_or_default(),
            ),
            None => {
                let cwd = std::env::current_dir()?;
                (SiteConfig::discover(&cwd)?, cwd)
            },
        };

        let store_path = match &args.store {
            Some(path) => path.clone(),
            None => config.store_path_from_base(&base_dir),
        };
        tracing::debug!("Language preference file: {}", store_path.display());

        let catalog =
            Catalog::load_embedded()?.with_missing_key_warnings(config.i18n.warn_missing_keys);
        let ctx = LanguageContext::new(Arc::new(catalog), FileStore::new(&store_path));

        Ok(Self {
            config,
            store_path,
            ctx,
        })
    }
}

pub(crate) fn parse_language(code: &str) -> Result<LanguageCode, CliError> {
    code.parse().map_err(|_| {
        UnknownLanguageError {
            code: code.to_string(),
            available: LanguageCode::all()
                .map(LanguageCode::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
        .into()
    })
}
