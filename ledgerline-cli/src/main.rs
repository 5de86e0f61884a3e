use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledgerline_core::{Transaction, TransactionBatch, to_iso};
use ledgerline_extract::StatementExtractor;

#[derive(Parser, Debug)]
#[command(name = "ledgerline", version, about = "Bank statement text to CSV converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from statement text files and write combined CSV
    Convert {
        /// Extracted statement text files, processed in argument order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output CSV path (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Report per-document extraction results without writing CSV
    Inspect {
        /// Extracted statement text files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Transactions to print per document
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { inputs, out } => convert(&inputs, out.as_deref()),
        Command::Inspect { inputs, limit } => inspect(&inputs, limit),
    }
}

fn convert(inputs: &[PathBuf], out: Option<&Path>) -> Result<()> {
    let extractor = StatementExtractor::new()?;
    let mut combined: TransactionBatch = Vec::new();

    for path in inputs {
        let Some(batch) = extract_document(&extractor, path) else {
            continue;
        };
        if batch.is_empty() {
            eprintln!("warning: no transactions extracted from {}", path.display());
            continue;
        }
        eprintln!("Extracted {} transactions from {}", batch.len(), path.display());
        combined.extend(batch);
    }

    match out {
        Some(path) => {
            let writer = csv::Writer::from_path(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_csv(writer, &combined)?;
            eprintln!("Wrote {} transactions to {}", combined.len(), path.display());
        }
        None => {
            write_csv(csv::Writer::from_writer(io::stdout()), &combined)?;
        }
    }

    Ok(())
}

fn inspect(inputs: &[PathBuf], limit: usize) -> Result<()> {
    let extractor = StatementExtractor::new()?;

    for path in inputs {
        let Some(batch) = extract_document(&extractor, path) else {
            continue;
        };
        println!("{}: {} transaction(s)", path.display(), batch.len());
        for txn in batch.iter().take(limit) {
            println!("  {}  {:>12.2}  {}", to_iso(txn.date), txn.amount, txn.description);
        }
    }

    Ok(())
}

/// Extract one document, or warn and skip it. A failing document never
/// aborts the remaining ones.
fn extract_document(extractor: &StatementExtractor, path: &Path) -> Option<TransactionBatch> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("warning: skipping {}: {}", path.display(), err);
            return None;
        }
    };
    match extractor.extract(&text) {
        Ok(batch) => Some(batch),
        Err(err) => {
            eprintln!("warning: skipping {}: {:#}", path.display(), err);
            None
        }
    }
}

/// Serialize the combined batch as CSV with a `date,description,amount`
/// header. Amounts render with two decimals; dates as `YYYY-MM-DD`.
fn write_csv<W: Write>(mut writer: csv::Writer<W>, transactions: &[Transaction]) -> Result<()> {
    writer.write_record(["date", "description", "amount"])?;
    for txn in transactions {
        writer.write_record([
            to_iso(txn.date),
            txn.description.clone(),
            format!("{:.2}", txn.amount),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
