//! # Quote CLI Library
//!
//! Core library for the `quote` binary: an interactive session that builds a
//! quote line by line and exports it as a PDF.
//!
//! ## Module Organization
//! ```text
//! quote_cli_lib/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Rate, VAT and output folder
//! │   └── session.rs  ◄─── Quote state + config + formatter
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum and the read loop
//! │   ├── parse.rs    ◄─── Typed line ──► Command
//! │   ├── details.rs  ◄─── Client/project/VAT commands
//! │   ├── items.rs    ◄─── Row commands
//! │   └── export.rs   ◄─── Summary and PDF export
//! ├── draft.rs        ◄─── JSON drafts for non-interactive export
//! └── error.rs        ◄─── Error type shown to the user
//! ```
//!
//! ## Two Ways In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  quote                    stdin ──► commands::run_interactive()         │
//! │                                                                         │
//! │  quote --draft a.json     QuoteDraft::load() ──► apply() ──► export     │
//! │                                                                         │
//! │  Both paths drive the same Session, so validation and file naming      │
//! │  are identical.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod draft;
pub mod error;
pub mod state;

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use draft::QuoteDraft;
use error::AppResult;
use state::{AppConfig, Session};

/// Build a work quote and export it as a PDF
#[derive(Debug, Clone, Parser)]
#[command(name = "quote", version, about)]
pub struct Cli {
    /// Build the quote from a JSON draft and export it without prompting
    #[arg(long, value_name = "FILE")]
    pub draft: Option<PathBuf>,

    /// Folder the PDF is written to (overrides QUOTE_OUTPUT_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Issue date printed on the quote, as YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Parses arguments and runs the program.
pub fn run() -> AppResult<()> {
    init_tracing();
    run_with(Cli::parse())
}

/// Runs with already-parsed arguments.
///
/// ## Sequence
/// 1. Load configuration from the environment, then apply `--output-dir`
/// 2. Create the session (validates the pricing)
/// 3. With `--draft`: apply the draft, print the summary, export
/// 4. Otherwise: read commands from stdin until `quit`
pub fn run_with(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    let issue_date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    info!(
        hourly_rate = %config.hourly_rate,
        vat_bps = config.vat_rate.bps(),
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let mut session = Session::new(config)?;

    match cli.draft {
        Some(path) => {
            QuoteDraft::load(&path)?.apply(session.state_mut())?;
            println!("{}", commands::export::summary(&session));
            println!("{}", commands::export::export(&session, None, issue_date)?);
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            commands::run_interactive(&mut session, stdin.lock(), &mut stdout, issue_date)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the session on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: WARN, INFO for the quote crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,quote_cli_lib=info,quote_document=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
