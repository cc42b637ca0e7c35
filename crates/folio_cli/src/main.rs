//! folio content-authoring CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use folio_i18n::{languages, resolve_from_path, rewrite_path, LanguageCode};

mod check;

#[derive(Parser)]
#[command(name = "folio", about = "Locale tooling for the folio site", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate locale catalogs against the default language
    Check {
        /// Directory containing <code>.json catalog files
        #[arg(default_value = "resource/locales")]
        dir: PathBuf,
    },
    /// Print the language a URL path resolves to
    Resolve {
        /// URL path, e.g. /fr/projects
        path: String,
    },
    /// Print the URL path for the same page in another language
    Rewrite {
        /// URL path, e.g. /fr/projects
        path: String,
        /// Target language tag, e.g. nl
        language: String,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { dir } => {
            let report = check::check_dir(&dir)?;
            for (code, key) in &report.incomplete {
                println!("warning: {code}.json is missing {key} (falls back to {})", LanguageCode::DEFAULT);
            }
            for (code, key) in &report.missing_in_default {
                println!(
                    "error: {key} exists in {code}.json but not in {}.json",
                    LanguageCode::DEFAULT
                );
            }
            if !report.is_ok() {
                println!("catalog check failed: the default language must cover every key");
                return Ok(ExitCode::FAILURE);
            }
            println!("catalog check passed ({} languages)", languages().len());
        }
        Command::Resolve { path } => {
            println!("{}", resolve_from_path(&path));
        }
        Command::Rewrite { path, language } => {
            let Some(target) = LanguageCode::from_tag(&language) else {
                let known: Vec<_> = LanguageCode::ALL.iter().map(|c| c.as_str()).collect();
                bail!(
                    "unknown language `{language}` (expected one of: {})",
                    known.join(", ")
                );
            };
            println!("{}", rewrite_path(&path, target));
        }
    }
    Ok(ExitCode::SUCCESS)
}
