use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::models::Transaction;

pub(crate) const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Description", "Amount"];

// Two-digit years go before four-digit ones: chrono's %Y would read "24" as year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y", "%d/%m/%Y", "%Y/%m/%d",
];

/// The statement lacks one or more of the required header columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MissingColumns(pub(crate) Vec<&'static str>);

impl std::fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CSV must have columns: {} (missing: {})",
            REQUIRED_COLUMNS.join(", "),
            self.0.join(", ")
        )
    }
}

impl std::error::Error for MissingColumns {}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    pub(crate) date: usize,
    pub(crate) description: usize,
    pub(crate) amount: usize,
}

impl ColumnMap {
    /// Locate Date, Description and Amount by exact header name.
    /// Extra columns are ignored.
    pub(crate) fn from_headers<'a, I>(headers: I) -> Result<Self, MissingColumns>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<String> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let find = |col: &str| names.iter().position(|n| n == col);

        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| find(*c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(MissingColumns(missing));
        }

        Ok(Self {
            date: find("Date").unwrap_or_default(),
            description: find("Description").unwrap_or_default(),
            amount: find("Amount").unwrap_or_default(),
        })
    }
}

pub(crate) struct StatementLoader;

impl StatementLoader {
    /// Read a bank statement CSV from disk into categorized transactions.
    pub(crate) fn load(path: &Path) -> Result<Vec<Transaction>> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let txns = Self::from_reader(file)
            .with_context(|| format!("Failed to load statement {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = txns.len(), "loaded statement");
        Ok(txns)
    }

    pub(crate) fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers().context("Failed to read CSV header")?.clone();
        let columns = ColumnMap::from_headers(headers.iter())?;

        let mut transactions = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result.context("Failed to read CSV record")?;
            // Header is line 1
            let line = record.position().map_or(i as u64 + 2, |p| p.line());
            let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

            let date_str = field(columns.date);
            let date = if date_str.is_empty() {
                tracing::debug!(line, "row has no date");
                None
            } else {
                Some(
                    parse_date(date_str)
                        .with_context(|| format!("Line {line}: failed to parse date '{date_str}'"))?,
                )
            };
            let amount = parse_decimal(field(columns.amount))
                .with_context(|| format!("Line {line}: failed to parse amount"))?;

            transactions.push(Transaction::new(
                date,
                field(columns.description).to_string(),
                amount,
            ));
        }

        Ok(transactions)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    // Timestamps such as "2024-01-15 09:30:00" keep only their date part
    if let Some((day, _)) = s.split_once([' ', 'T']) {
        if let Ok(d) = NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ',', '"'], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .with_context(|| format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
