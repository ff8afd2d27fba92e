mod categorize;
mod config;
mod export;
mod import;
mod logging;
mod models;
mod report;
mod run;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "finstate",
    version,
    about = "Bank statement CSV to income statement, balance sheet, ratios and valuation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse statements, transactions and charts in the terminal
    View {
        /// Statement CSV with Date, Description and Amount columns
        csv: PathBuf,

        /// Directory for :pdf / :xlsx exports (default: downloads folder)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the income statement, balance sheet, ratios and valuation
    Summary {
        /// Statement CSV with Date, Description and Amount columns
        csv: PathBuf,

        /// Also list every categorized transaction
        #[arg(long)]
        transactions: bool,
    },

    /// Write the PDF report and/or the XLSX workbook
    Export {
        /// Statement CSV with Date, Description and Amount columns
        csv: PathBuf,

        /// PDF output path
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// XLSX output path
        #[arg(long)]
        xlsx: Option<PathBuf>,

        /// Directory for both files when neither --pdf nor --xlsx is given
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List the categorization rules in priority order
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run::as_cli(cli.command)
}
