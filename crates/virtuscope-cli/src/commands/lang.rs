use super::{Site, SiteArgs, parse_language};
use crate::error::CliError;
use crate::ui;
use clap::{Parser, Subcommand};
use virtuscope_site::LanguageSelector;

#[derive(Debug, Parser)]
pub struct LangArgs {
    #[command(subcommand)]
    pub command: LangCommand,
}

#[derive(Debug, Subcommand)]
pub enum LangCommand {
    /// Print the saved language
    Get,
    /// Save a new language
    Set {
        /// One of en, lg, fr, sw, rw.
        code: String,
    },
    /// List the supported languages and how much of each is translated
    List,
}

pub fn run_lang(site_args: &SiteArgs, args: LangArgs) -> Result<(), CliError> {
    let mut site = Site::load(site_args)?;

    match args.command {
        LangCommand::Get => ui::print_active_language(site.ctx.active_language()),
        LangCommand::Set { code } => {
            let language = parse_language(&code)?;
            site.ctx.try_set_active_language(language)?;
            ui::print_language_saved(language, &site.store_path);
        },
        LangCommand::List => {
            let catalog = site.ctx.catalog().clone();
            for option in LanguageSelector::new().options(&site.ctx) {
                ui::print_language_option(&option, &catalog.coverage(option.code));
            }
        },
    }

    Ok(())
}
