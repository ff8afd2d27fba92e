use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::statements::checked_sum;
use crate::models::{Category, Transaction};

/// Outflow totals per category, as positive numbers, in category order.
/// Only rows with a negative amount count; categories with no outflow are
/// left out, so a statement without outflows yields an empty series.
pub(crate) fn expense_by_category(transactions: &[Transaction]) -> Result<Vec<(Category, Decimal)>> {
    let mut series = Vec::new();
    for &cat in Category::all() {
        let mut rows = transactions
            .iter()
            .filter(|t| t.category == cat && t.is_debit())
            .peekable();
        if rows.peek().is_none() {
            continue;
        }
        let total = checked_sum(rows.map(Transaction::abs_amount))
            .with_context(|| format!("{cat} outflows"))?;
        series.push((cat, total));
    }
    Ok(series)
}

/// Cumulative balance at the end of each statement date, dates ascending.
/// Undated rows have no place on the line and are left out.
pub(crate) fn running_balance(transactions: &[Transaction]) -> Result<Vec<(NaiveDate, Decimal)>> {
    let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for txn in transactions {
        let Some(date) = txn.date else { continue };
        let net = by_date.entry(date).or_default();
        *net = net
            .checked_add(txn.amount)
            .with_context(|| format!("Amount overflow on {date}"))?;
    }

    let mut balance = Decimal::ZERO;
    by_date
        .into_iter()
        .map(|(date, net)| -> Result<(NaiveDate, Decimal)> {
            balance = balance
                .checked_add(net)
                .with_context(|| format!("Balance overflow on {date}"))?;
            Ok((date, balance))
        })
        .collect()
}
