//! Translation coverage check.
//!
//! Every locale is compared against the default one: keys it lacks are
//! reported as missing (they render in the default language), keys the
//! default locale does not have are errors.

use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::ui;
use anyhow::Context as _;
use clap::Parser;
use std::path::{Path, PathBuf};
use virtuscope_i18n::{Catalog, CatalogError};
use virtuscope_lang::LanguageCode;

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// List every missing key, not just the count per language.
    #[arg(long)]
    pub all: bool,

    /// Check the `<code>.json` files of this directory instead of the built-in catalog.
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run_check(site_args: &SiteArgs, args: CheckArgs) -> Result<(), CliError> {
    let catalog = match &args.dir {
        Some(dir) => {
            ui::print_check_header(&dir.display().to_string());
            read_locale_dir(dir)?
        },
        None => {
            ui::print_check_header("the built-in catalog");
            Catalog::clone(Site::load(site_args)?.ctx.catalog())
        },
    };

    let mut missing = 0;
    let mut unknown = 0;

    for language in catalog.languages().filter(|l| !l.is_default()) {
        let coverage = catalog.coverage(language);
        ui::print_coverage(&coverage);
        missing += coverage.total - coverage.translated;

        if args.all {
            for key in catalog.missing_keys(language) {
                ui::print_missing_key(key);
            }
        }

        for key in catalog.orphan_keys(language) {
            ui::print_unknown_locale_key(language, key);
            unknown += 1;
        }
    }

    if unknown > 0 {
        return Err(CliError::UnknownKeys { count: unknown });
    }

    if missing == 0 {
        ui::print_check_success();
    } else {
        ui::print_check_summary(missing);
    }

    Ok(())
}

fn read_locale_dir(dir: &Path) -> Result<Catalog, CliError> {
    let mut sources = Vec::new();

    for entry in fs_err::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let language = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<LanguageCode>().ok())
            .ok_or(CatalogError::UnknownLocaleFile(file_name))?;

        let content = fs_err::read_to_string(&path)
            .with_context(|| format!("failed to read locale file {}", path.display()))?;
        sources.push((language, content));
    }

    Ok(Catalog::from_sources(sources)?)
}
