//! Terminal output. Results go to stdout, problems to stderr.

use colored::Colorize as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use virtuscope_i18n::Coverage;
use virtuscope_lang::LanguageCode;
use virtuscope_site::LanguageOption;

/// Installs the stderr log subscriber. `RUST_LOG` applies unless `verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

pub fn disable_colors() {
    colored::control::set_override(false);
}

pub fn print_unknown_key(key: &str) {
    eprintln!(
        "{} '{}' is not defined in any locale",
        "warning:".yellow().bold(),
        key
    );
}

pub fn print_active_language(language: LanguageCode) {
    println!(
        "{} {} ({})",
        language.flag(),
        language.as_str().green(),
        language.native_name()
    );
}

pub fn print_language_saved(language: LanguageCode, store_path: &Path) {
    println!(
        "{} {} {}",
        "Language set to".dimmed(),
        language.as_str().green(),
        format!("(saved to {})", store_path.display()).dimmed()
    );
}

pub fn print_language_option(option: &LanguageOption, coverage: &Coverage) {
    let marker = if option.selected { "*" } else { " " };
    println!(
        "{} {} {:<4}{:<14}{:>5.0}%",
        marker.green().bold(),
        option.flag,
        option.code.as_str(),
        option.name,
        coverage.percent()
    );
}

pub fn print_check_header(source: &str) {
    println!("{} {}", "Checking translations from".dimmed(), source);
}

pub fn print_coverage(coverage: &Coverage) {
    let summary = format!(
        "{}/{} ({:.0}%)",
        coverage.translated,
        coverage.total,
        coverage.percent()
    );
    let summary = if coverage.is_complete() {
        summary.green()
    } else {
        summary.yellow()
    };
    println!("{:<4}{}", coverage.language.as_str(), summary);
}

pub fn print_missing_key(key: &str) {
    println!("    {} {}", "missing".yellow(), key);
}

pub fn print_unknown_locale_key(language: LanguageCode, key: &str) {
    eprintln!(
        "{} {} has key '{}' which is not in {}",
        "error:".red().bold(),
        language.as_str(),
        key,
        LanguageCode::DEFAULT.as_str()
    );
}

pub fn print_check_success() {
    println!("{}", "All locales are complete.".green());
}

pub fn print_check_summary(missing: usize) {
    println!(
        "{} {} translation(s) missing; they fall back to {}",
        "Done:".yellow(),
        missing,
        LanguageCode::DEFAULT.english_name()
    );
}

pub fn print_field_error(label: &str, message: &str) {
    eprintln!("{} {}: {}", "invalid".red().bold(), label, message);
}

pub fn print_sending(label: &str) {
    println!("{}", label.dimmed());
}

pub fn print_delivered(message: &str, id: u64) {
    println!("{} {}", message.green(), format!("(#{})", id).dimmed());
}
