//! numlit - numeric literal classifier
//! 
//! Reads literals from standard input (interactively, with a prompt) or from
//! files, and prints the type each literal classifies to.

mod config;
mod repl;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use config::{DriverConfig, OutputFormat};
use log::LevelFilter;
use repl::Session;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "numlit", version, about = "Classify numeric literals by type")]
struct Cli {
    /// Files to classify; reads standard input interactively when omitted
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Prompt shown before each interactive line (empty to disable)
    #[arg(long, default_value = ">>")]
    prompt: String,

    /// Show why a literal is invalid
    #[arg(short, long)]
    explain: bool,

    /// Print per-kind counts when input ends
    #[arg(short, long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> DriverConfig {
        DriverConfig {
            format: self.format,
            prompt: self.prompt.clone(),
            explain: self.explain,
            summary: self.summary,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let mut session = Session::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        session.run(io::stdin().lock(), &mut out, true)?;
    } else {
        for path in &cli.files {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            log::info!("classifying {}", path.display());
            session
                .run(BufReader::new(file), &mut out, false)
                .with_context(|| format!("failed to classify {}", path.display()))?;
        }
    }

    log::info!("classified {} literals", session.summary().total());
    session.finish(&mut out)
}
