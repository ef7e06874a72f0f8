//! Extract the text of Word documents into `.txt` files.

use anyhow::Result;
use clap::Parser;
use mdocx::extract::{BatchConfig, run_batch};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docx2txt")]
#[command(about = "Extract paragraphs and table rows of Word documents into text files", long_about = None)]
#[command(version)]
struct Args {
    /// Documents to extract; each is written next to itself with a .txt extension
    files: Vec<PathBuf>,

    /// YAML file with a `files:` list, used when no files are given
    #[arg(short, long, value_name = "YAML")]
    config: Option<PathBuf>,

    /// Log per-file details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = if !args.files.is_empty() {
        BatchConfig::new(args.files)
    } else if let Some(path) = args.config {
        BatchConfig::from_path(&path)?
    } else {
        BatchConfig::default()
    };

    let stdout = std::io::stdout();
    let report = run_batch(&config, &mut stdout.lock())?;
    tracing::debug!(
        extracted = report.extracted_count(),
        not_found = report.not_found_count(),
        failed = report.failed_count(),
        "batch finished"
    );
    Ok(())
}
