//! Batch command - extract data from many recognized-text files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use beleg_core::{ReceiptParser, ReceiptTextParser};

use super::parse::{format_receipt, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input text files (e.g. "receipts/*.txt")
    #[arg(required = true)]
    pattern: String,

    /// Directory for per-file results (default: print to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let files: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser = ReceiptTextParser::new();
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(file.display().to_string());

        if let Err(err) = process_file(&parser, file, &args) {
            warn!("failed to process {}: {err}", file.display());
            failed += 1;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!(
        "{} {} file(s), {} failed",
        style("Processed").green(),
        files.len(),
        failed
    );

    Ok(())
}

fn process_file(parser: &ReceiptTextParser, file: &Path, args: &BatchArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(file)?;
    // Batch inputs carry no token scores; confidence aggregates to 0.
    let receipt = parser.parse(&text, &[])?;
    let output = format_receipt(&receipt, args.format)?;

    match &args.output_dir {
        Some(dir) => {
            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipt");
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Text => "txt",
            };
            fs::write(dir.join(format!("{stem}.{extension}")), &output)?;
        }
        None => {
            println!("{}", style(file.display()).bold());
            println!("{output}");
        }
    }

    Ok(())
}
