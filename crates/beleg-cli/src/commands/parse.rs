//! Parse command - extract structured data from one recognized-text file.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use beleg_core::{ReceiptData, ReceiptParser, ReceiptTextParser, RecognitionToken};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file with recognized text
    #[arg(required = true)]
    input: PathBuf,

    /// JSON file with recognition token scores
    #[arg(short, long)]
    scores: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    let tokens = load_tokens(args.scores.as_deref())?;

    info!("Parsing file: {}", args.input.display());

    let parser = ReceiptTextParser::new();
    let receipt = parser.parse(&text, &tokens)?;

    let output = format_receipt(&receipt, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!("{} {}", style("Wrote").green(), output_path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}

/// Load recognition tokens from a JSON file, or none when no file was given.
pub fn load_tokens(path: Option<&Path>) -> anyhow::Result<Vec<RecognitionToken>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(Vec::new()),
    }
}

/// Format a parsed receipt for output.
pub fn format_receipt(receipt: &ReceiptData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "{} {}",
                style("Merchant:").bold(),
                receipt.merchant_name.as_deref().unwrap_or("-")
            )?;
            writeln!(
                out,
                "{} {}",
                style("Date:").bold(),
                receipt
                    .date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(
                out,
                "{} {}",
                style("Total:").bold(),
                receipt
                    .total_amount
                    .map(|a| format!("{a} EUR"))
                    .unwrap_or_else(|| "-".to_string())
            )?;
            writeln!(
                out,
                "{} {:.2}",
                style("Confidence:").bold(),
                receipt.confidence
            )?;
            if !receipt.items.is_empty() {
                writeln!(out, "{}", style("Items:").bold())?;
                for item in &receipt.items {
                    writeln!(out, "  - {item}")?;
                }
            }
            Ok(out)
        }
    }
}
