use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::models::Transaction;
use crate::report::{format_amount, Report};
use crate::Command;

const RULE_WIDTH: usize = 44;

/// Dispatch a parsed command. Logging goes to stderr, so it is only
/// installed when the terminal UI is not taking over the screen.
pub(crate) fn as_cli(command: Command) -> Result<()> {
    if !matches!(command, Command::View { .. }) {
        crate::logging::init();
    }

    match command {
        Command::View { csv, out_dir } => super::as_tui(&csv, ExportConfig::new(out_dir)),
        Command::Summary { csv, transactions } => cli_summary(&csv, transactions),
        Command::Export {
            csv,
            pdf,
            xlsx,
            out_dir,
        } => cli_export(&csv, pdf, xlsx, ExportConfig::new(out_dir)),
        Command::Rules => cli_rules(),
    }
}

fn cli_summary(path: &Path, show_transactions: bool) -> Result<()> {
    let txns = super::load_statement(path)?;
    let report = Report::build(&txns)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(
        &mut out,
        &path.display().to_string(),
        &txns,
        &report,
        show_transactions,
    )?;
    Ok(())
}

fn cli_export(
    path: &Path,
    pdf: Option<PathBuf>,
    xlsx: Option<PathBuf>,
    config: ExportConfig,
) -> Result<()> {
    let txns = super::load_statement(path)?;
    let report = Report::build(&txns)?;

    let (pdf, xlsx) = export_targets(pdf, xlsx, &config);

    if let Some(pdf_path) = pdf {
        crate::export::write_pdf(&report, &pdf_path)?;
        println!("Wrote PDF report to {}", pdf_path.display());
    }
    if let Some(xlsx_path) = xlsx {
        crate::export::write_xlsx(&txns, &report, &xlsx_path)?;
        println!(
            "Wrote {} transactions to {}",
            txns.len(),
            xlsx_path.display()
        );
    }
    Ok(())
}

/// With no explicit path, both files go to the output directory.
/// Otherwise only the requested ones are written.
fn export_targets(
    pdf: Option<PathBuf>,
    xlsx: Option<PathBuf>,
    config: &ExportConfig,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if pdf.is_none() && xlsx.is_none() {
        (Some(config.pdf_path()), Some(config.xlsx_path()))
    } else {
        (pdf, xlsx)
    }
}

fn cli_rules() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rules(&mut out)?;
    Ok(())
}

pub(crate) fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:<4} {:<28} Category", "#", "Description contains")?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH + 6))?;
    for (i, rule) in crate::categorize::rules().iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<28} {}",
            i + 1,
            rule.keywords.join(" | "),
            rule.category
        )?;
    }
    let n = crate::categorize::rules().len();
    writeln!(
        out,
        "{:<4} {:<28} {}",
        n + 1,
        "(no match, amount > 0)",
        crate::categorize::fallback_category(Decimal::ONE)
    )?;
    writeln!(
        out,
        "{:<4} {:<28} {}",
        n + 2,
        "(no match, amount <= 0)",
        crate::categorize::fallback_category(Decimal::ZERO)
    )?;
    Ok(())
}

pub(crate) fn write_summary<W: Write>(
    out: &mut W,
    source: &str,
    txns: &[Transaction],
    report: &Report,
    show_transactions: bool,
) -> io::Result<()> {
    let statements = report.statement_rows();

    writeln!(out, "finstate: {source}")?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
    writeln!(out, "  Transactions: {}", txns.len())?;

    writeln!(out)?;
    writeln!(out, "Income Statement")?;
    for (label, value) in &statements[..3] {
        write_figure(out, label, &format_amount(*value))?;
    }

    writeln!(out)?;
    writeln!(out, "Balance Sheet (Simplified)")?;
    for (label, value) in &statements[3..] {
        write_figure(out, label, &format_amount(*value))?;
    }

    writeln!(out)?;
    writeln!(out, "Ratios")?;
    for (label, ratio) in report.ratios.rows() {
        write_figure(out, label, &format_amount(ratio.value()))?;
    }

    writeln!(out)?;
    writeln!(out, "Enterprise Valuation")?;
    for (label, value) in report.valuation_rows() {
        write_figure(out, label, &format_amount(value))?;
    }

    if !report.expenses_by_category.is_empty() {
        writeln!(out)?;
        writeln!(out, "Expenses by Category:")?;
        for (category, amount) in &report.expenses_by_category {
            write_figure(out, category.as_str(), &format_amount(*amount))?;
        }
    }

    if show_transactions && !txns.is_empty() {
        writeln!(out)?;
        writeln!(out, "Transactions:")?;
        for txn in txns {
            writeln!(
                out,
                "  {:<10}  {:<32} {:>14}  {}",
                txn.date_label(),
                crate::ui::util::truncate(&txn.description, 32),
                format_amount(txn.amount),
                txn.category
            )?;
        }
    }

    Ok(())
}

fn write_figure<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {label:<24} {value:>16}")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
