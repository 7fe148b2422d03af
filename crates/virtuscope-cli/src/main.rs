use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use virtuscope_cli::commands::{
    CheckArgs, ContactArgs, LangArgs, SiteArgs, TranslateArgs, run_check, run_contact, run_lang,
    run_translate,
};
use virtuscope_cli::ui;

#[derive(Parser)]
#[command(name = "virtuscope")]
#[command(about = "Translations, language preference and contact form of the VirtuScope site")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the translation of a key
    T(TranslateArgs),

    /// Show, change or list the site language
    Lang(LangArgs),

    /// Report translations missing from each locale
    Check(CheckArgs),

    /// Validate and send a contact message
    Contact(ContactArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    if cli.no_color {
        ui::disable_colors();
    }
    ui::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::T(args) => run_translate(&cli.site, args),
        Commands::Lang(args) => run_lang(&cli.site, args),
        Commands::Check(args) => run_check(&cli.site, args),
        Commands::Contact(args) => run_contact(&cli.site, args),
    };

    result.map_err(miette::Report::new)
}
