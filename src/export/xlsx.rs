use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::models::Transaction;
use crate::report::Report;

pub(crate) const TRANSACTIONS_SHEET: &str = "Transactions";
pub(crate) const STATEMENTS_SHEET: &str = "Statements";

const TRANSACTION_HEADERS: [&str; 4] = ["Date", "Description", "Amount", "Category"];
const STATEMENT_HEADERS: [&str; 2] = ["Metric", "Value"];

/// Build the two-sheet workbook and return the XLSX bytes.
pub(crate) fn render_xlsx(transactions: &[Transaction], report: &Report) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");
    let date = Format::new().set_num_format("yyyy-mm-dd");

    write_transactions(workbook.add_worksheet(), transactions, &bold, &date, &money)
        .context("Failed to write transactions sheet")?;
    write_statements(workbook.add_worksheet(), report, &bold, &money)
        .context("Failed to write statements sheet")?;

    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

pub(crate) fn write_xlsx(transactions: &[Transaction], report: &Report, path: &Path) -> Result<()> {
    let bytes = render_xlsx(transactions, report)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = transactions.len(), "wrote workbook");
    Ok(())
}

fn write_transactions(
    sheet: &mut Worksheet,
    transactions: &[Transaction],
    bold: &Format,
    date: &Format,
    money: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(TRANSACTIONS_SHEET)?;
    write_header(sheet, &TRANSACTION_HEADERS, bold)?;

    for (i, txn) in transactions.iter().enumerate() {
        let row = i as u32 + 1;
        // Undated rows leave the cell blank
        match txn.date.map(|d| (d, excel_date(d))) {
            Some((_, Some(cell))) => {
                sheet.write_date_with_format(row, 0, &cell, date)?;
            }
            Some((d, None)) => {
                sheet.write_string(row, 0, d.format("%Y-%m-%d").to_string())?;
            }
            None => {}
        }
        sheet.write_string(row, 1, &txn.description)?;
        sheet.write_number_with_format(row, 2, to_f64(txn.amount), money)?;
        sheet.write_string(row, 3, txn.category.as_str())?;
    }

    sheet.set_column_width(0, 12)?;
    sheet.set_column_width(1, 40)?;
    sheet.set_column_width(2, 14)?;
    sheet.set_column_width(3, 18)?;
    Ok(())
}

fn write_statements(
    sheet: &mut Worksheet,
    report: &Report,
    bold: &Format,
    money: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(STATEMENTS_SHEET)?;
    write_header(sheet, &STATEMENT_HEADERS, bold)?;

    for (i, (metric, value)) in report.statement_rows().iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *metric)?;
        sheet.write_number_with_format(row, 1, to_f64(*value), money)?;
    }

    sheet.set_column_width(0, 14)?;
    sheet.set_column_width(1, 16)?;
    Ok(())
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), XlsxError> {
    for (col, name) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, bold)?;
    }
    Ok(())
}

/// Excel only has serial dates from 1900 on; earlier dates stay text.
fn excel_date(d: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(d.year()).ok()?;
    ExcelDateTime::from_ymd(year, d.month() as u8, d.day() as u8).ok()
}

fn to_f64(val: rust_decimal::Decimal) -> f64 {
    val.to_f64().unwrap_or_default()
}
