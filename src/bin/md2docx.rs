//! Convert a Markdown file into a Word document.

use anyhow::{Context, Result};
use clap::Parser;
use mdocx::markdown::{ConvertOptions, convert_file};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md2docx")]
#[command(about = "Convert a Markdown file into a Word (.docx) document", long_about = None)]
#[command(version)]
struct Args {
    /// Markdown file to convert [default: COMPLETE_APPLICATION_DOCUMENTATION.md]
    input: Option<PathBuf>,

    /// Word file to write [default: input name with a .docx extension]
    output: Option<PathBuf>,

    /// Log each classified line to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut options = match args.input {
        Some(input) => ConvertOptions::for_input(input),
        None => ConvertOptions::default(),
    };
    if let Some(output) = args.output {
        options = options.with_output(output);
    }

    convert_file(&options).with_context(|| {
        format!(
            "failed to convert {} to {}",
            options.input.display(),
            options.output.display()
        )
    })?;

    println!(
        "Converted {} to {}",
        options.input.display(),
        options.output.display()
    );
    Ok(())
}
