#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::Category;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn load_str(content: &str) -> Result<Vec<Transaction>> {
    StatementLoader::from_reader(content.as_bytes())
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── parse_decimal ─────────────────────────────────────────────

#[test]
fn test_parse_decimal_basic() {
    assert_eq!(parse_decimal("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_decimal("-42.99").unwrap(), dec!(-42.99));
}

#[test]
fn test_parse_decimal_with_currency() {
    assert_eq!(parse_decimal("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_decimal("-$99.99").unwrap(), dec!(-99.99));
}

#[test]
fn test_parse_decimal_parentheses_negative() {
    assert_eq!(parse_decimal("(500.00)").unwrap(), dec!(-500.00));
}

#[test]
fn test_parse_decimal_empty() {
    assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
    assert_eq!(parse_decimal("  ").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_decimal_scientific() {
    assert_eq!(parse_decimal("1.5e3").unwrap(), dec!(1500));
}

#[test]
fn test_parse_decimal_invalid() {
    assert!(parse_decimal("not_a_number").is_err());
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso() {
    assert_eq!(parse_date("2024-01-15").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_us() {
    assert_eq!(parse_date("01/15/2024").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_two_digit_year() {
    assert_eq!(parse_date("01/15/24").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_day_first_when_month_invalid() {
    assert_eq!(parse_date("15/01/2024").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_timestamp() {
    assert_eq!(parse_date("2024-01-15 09:30:00").unwrap(), ymd(2024, 1, 15));
    assert_eq!(parse_date("2024-01-15T09:30:00").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_invalid() {
    assert!(parse_date("not-a-date").is_err());
    assert!(parse_date("").is_err());
}

// ── ColumnMap ─────────────────────────────────────────────────

#[test]
fn test_column_map_any_order() {
    let map = ColumnMap::from_headers(["Amount", "Balance", "Date", "Description"]).unwrap();
    assert_eq!(
        map,
        ColumnMap {
            date: 2,
            description: 3,
            amount: 0,
        }
    );
}

#[test]
fn test_column_map_missing_one() {
    let err = ColumnMap::from_headers(["Date", "Description"]).unwrap_err();
    assert_eq!(err, MissingColumns(vec!["Amount"]));
}

#[test]
fn test_column_map_is_case_sensitive() {
    let err = ColumnMap::from_headers(["date", "description", "amount"]).unwrap_err();
    assert_eq!(err.0, vec!["Date", "Description", "Amount"]);
}

#[test]
fn test_column_map_trims_headers_and_bom() {
    let map = ColumnMap::from_headers(["\u{feff}Date", " Description ", "Amount"]).unwrap();
    assert_eq!(map.date, 0);
    assert_eq!(map.description, 1);
}

#[test]
fn test_missing_columns_message() {
    let msg = MissingColumns(vec!["Amount"]).to_string();
    assert!(msg.starts_with("CSV must have columns: Date, Description, Amount"));
    assert!(msg.contains("missing: Amount"));
}

// ── StatementLoader ───────────────────────────────────────────

#[test]
fn test_load_basic_rows() {
    let txns = load_str(
        "Date,Description,Amount\n\
         2024-01-01,Shell Fuel,-50\n\
         2024-01-02,Salary,2000\n\
         2024-01-03,Office Rent,-300\n",
    )
    .unwrap();
    assert_eq!(txns.len(), 3);
    assert_eq!(txns[0].date, Some(ymd(2024, 1, 1)));
    assert_eq!(txns[0].description, "Shell Fuel");
    assert_eq!(txns[0].amount, dec!(-50));
    assert_eq!(txns[0].category, Category::FuelExpense);
    assert_eq!(txns[1].category, Category::PayrollExpense);
    assert_eq!(txns[2].category, Category::RentExpense);
}

#[test]
fn test_load_ignores_extra_columns() {
    let txns = load_str(
        "Reference,Date,Amount,Balance,Description\n\
         A1,2024-02-01,1200,1200,Invoice 7\n",
    )
    .unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].description, "Invoice 7");
    assert_eq!(txns[0].amount, dec!(1200));
    assert_eq!(txns[0].category, Category::SalesIncome);
}

#[test]
fn test_load_missing_column_is_error() {
    let err = load_str("Date,Memo,Amount\n2024-01-01,x,1\n").unwrap_err();
    let missing = err.downcast_ref::<MissingColumns>().unwrap();
    assert_eq!(missing.0, vec!["Description"]);
}

#[test]
fn test_load_header_only() {
    let txns = load_str("Date,Description,Amount\n").unwrap();
    assert!(txns.is_empty());
}

#[test]
fn test_load_keeps_blank_dates() {
    let txns = load_str(
        "Date,Description,Amount\n\
         2024-01-01,Coffee,-4.50\n\
         ,Pending,-1\n\
         2024-01-02,Lunch,-12.00\n",
    )
    .unwrap();
    assert_eq!(txns.len(), 3);
    assert_eq!(txns[1].date, None);
    assert_eq!(txns[1].description, "Pending");
    assert_eq!(txns[1].amount, dec!(-1));
}

#[test]
fn test_undated_row_counts_in_report() {
    let txns = load_str(
        "Date,Description,Amount\n\
         2024-01-01,Client invoice,1000\n\
         ,Client invoice,500\n",
    )
    .unwrap();
    let report = crate::report::Report::build(&txns).unwrap();
    assert_eq!(report.income.revenue, dec!(1500));
    assert_eq!(report.balance.assets, dec!(1500));
    // Only the dated row has a point on the balance line
    assert_eq!(report.balance_by_date, vec![(ymd(2024, 1, 1), dec!(1000))]);
}

#[test]
fn test_load_quoted_fields() {
    let txns = load_str("Date,Description,Amount\n2024-01-15,\"Coffee, Shop\",\"-1,004.50\"\n").unwrap();
    assert_eq!(txns[0].description, "Coffee, Shop");
    assert_eq!(txns[0].amount, dec!(-1004.50));
}

#[test]
fn test_load_short_row_has_blank_description() {
    let txns = load_str("Date,Amount,Description\n2024-01-15,25\n").unwrap();
    assert_eq!(txns[0].description, "");
    assert_eq!(txns[0].category, Category::SalesIncome);
}

#[test]
fn test_load_bad_amount_names_line() {
    let err = load_str("Date,Description,Amount\n2024-01-15,Coffee,abc\n").unwrap_err();
    assert!(format!("{err:#}").contains("Line 2"));
}

#[test]
fn test_load_bad_date_names_line() {
    let err = load_str(
        "Date,Description,Amount\n\
         2024-01-15,Coffee,-1\n\
         someday,Tea,-2\n",
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Line 3"));
}

#[test]
fn test_load_from_path() {
    let file = make_csv_file("Date,Description,Amount\n2024-01-15,VAT return,-99\n");
    let txns = StatementLoader::load(file.path()).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].category, Category::Tax);
}

#[test]
fn test_load_missing_file() {
    let result = StatementLoader::load(Path::new("/nonexistent/statement.csv"));
    assert!(result.is_err());
}
