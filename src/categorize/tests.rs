#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

// ── Keyword rules ─────────────────────────────────────────────

#[test]
fn test_categorize_fuel() {
    assert_eq!(categorize("Shell Fuel", dec!(-50)), Category::FuelExpense);
    assert_eq!(categorize("SHELL STATION 042", dec!(-20)), Category::FuelExpense);
    assert_eq!(categorize("BP fuel card", dec!(-75.10)), Category::FuelExpense);
}

#[test]
fn test_categorize_payroll() {
    assert_eq!(categorize("Salary", dec!(2000)), Category::PayrollExpense);
    assert_eq!(categorize("ADP PAYROLL RUN", dec!(-4200)), Category::PayrollExpense);
}

#[test]
fn test_categorize_rent() {
    assert_eq!(categorize("Office Rent", dec!(-300)), Category::RentExpense);
    // Substring match, not word match
    assert_eq!(categorize("Car rental", dec!(-80)), Category::RentExpense);
}

#[test]
fn test_categorize_tax() {
    assert_eq!(categorize("HMRC VAT Q1", dec!(-900)), Category::Tax);
    assert_eq!(categorize("Income tax refund", dec!(150)), Category::Tax);
}

#[test]
fn test_categorize_case_insensitive() {
    assert_eq!(categorize("fuel", dec!(-1)), Category::FuelExpense);
    assert_eq!(categorize("FUEL", dec!(-1)), Category::FuelExpense);
    assert_eq!(categorize("FuEl", dec!(-1)), Category::FuelExpense);
}

// ── Priority ──────────────────────────────────────────────────

#[test]
fn test_categorize_rent_beats_tax() {
    assert_eq!(categorize("Rent incl. tax", dec!(-500)), Category::RentExpense);
    assert_eq!(categorize("tax on rent", dec!(-500)), Category::RentExpense);
}

#[test]
fn test_categorize_fuel_beats_everything() {
    assert_eq!(
        categorize("shell payroll rent tax", dec!(10)),
        Category::FuelExpense
    );
}

#[test]
fn test_categorize_keyword_ignores_sign() {
    // A positive amount with a keyword still takes the keyword's category
    assert_eq!(categorize("Fuel rebate", dec!(25)), Category::FuelExpense);
}

// ── Sign fallback ─────────────────────────────────────────────

#[test]
fn test_categorize_positive_is_sales_income() {
    assert_eq!(categorize("Invoice 1043 paid", dec!(1200)), Category::SalesIncome);
}

#[test]
fn test_categorize_negative_is_other_expense() {
    assert_eq!(categorize("Stationery", dec!(-12.40)), Category::OtherExpense);
}

#[test]
fn test_categorize_zero_is_other_expense() {
    assert_eq!(categorize("Adjustment", dec!(0)), Category::OtherExpense);
}

#[test]
fn test_categorize_empty_description() {
    assert_eq!(categorize("", dec!(10)), Category::SalesIncome);
    assert_eq!(categorize("", dec!(-10)), Category::OtherExpense);
}

#[test]
fn test_categorize_deterministic() {
    for _ in 0..3 {
        assert_eq!(categorize("Office Rent", dec!(-300)), Category::RentExpense);
    }
}

// ── rules ─────────────────────────────────────────────────────

#[test]
fn test_rules_order() {
    let cats: Vec<Category> = rules().iter().map(|r| r.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::FuelExpense,
            Category::PayrollExpense,
            Category::RentExpense,
            Category::Tax,
        ]
    );
}

#[test]
fn test_rules_keywords_lowercase() {
    for rule in rules() {
        for k in rule.keywords {
            assert_eq!(*k, k.to_lowercase());
        }
    }
}

#[test]
fn test_fallback_category() {
    assert_eq!(fallback_category(dec!(0.01)), Category::SalesIncome);
    assert_eq!(fallback_category(dec!(-0.01)), Category::OtherExpense);
}
