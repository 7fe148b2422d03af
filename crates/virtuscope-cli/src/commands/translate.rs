use super::{SiteArgs, parse_language};
use crate::error::CliError;
use crate::ui;
use clap::Parser;
use virtuscope_i18n::Translator;
use virtuscope_lang::LanguageCode;

#[derive(Debug, Parser)]
pub struct TranslateArgs {
    /// Catalog key, such as `hero.title`.
    pub key: String,

    /// Language to translate into (defaults to the saved language).
    #[arg(short, long)]
    pub lang: Option<String>,
}

pub fn run_translate(site_args: &SiteArgs, args: TranslateArgs) -> Result<(), CliError> {
    let site = super::Site::load(site_args)?;
    let language = match args.lang.as_deref() {
        Some(code) => parse_language(code)?,
        None => site.ctx.active_language(),
    };

    let catalog = site.ctx.catalog();
    if catalog.lookup(LanguageCode::DEFAULT, &args.key).is_none() {
        ui::print_unknown_key(&args.key);
    }

    let translator = Translator::new(catalog, language);
    println!("{}", translator.t(&args.key));
    Ok(())
}
