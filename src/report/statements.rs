use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Revenue, expenses and the resulting profit for a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct IncomeStatement {
    pub(crate) revenue: Decimal,
    /// Signed sum of expense-category rows, normally negative.
    pub(crate) expenses: Decimal,
    pub(crate) net_profit: Decimal,
}

impl IncomeStatement {
    pub(crate) fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let revenue = sum_where(transactions, |t| t.category.is_income()).context("revenue")?;
        let expenses = expense_total(transactions)?;
        let net_profit = revenue
            .checked_add(expenses)
            .context("Amount overflow in net profit")?;
        Ok(Self {
            revenue,
            expenses,
            net_profit,
        })
    }
}

/// Simplified balance sheet: everything that came in or went out is an
/// asset movement, expense outflows stand in for liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BalanceSheet {
    pub(crate) assets: Decimal,
    pub(crate) liabilities: Decimal,
    pub(crate) equity: Decimal,
}

impl BalanceSheet {
    pub(crate) fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let assets = sum_where(transactions, |_| true).context("assets")?;
        let liabilities = expense_total(transactions)?.abs();
        let equity = assets
            .checked_sub(liabilities)
            .context("Amount overflow in equity")?;
        Ok(Self {
            assets,
            liabilities,
            equity,
        })
    }
}

fn expense_total(transactions: &[Transaction]) -> Result<Decimal> {
    sum_where(transactions, |t| t.category.is_expense()).context("expenses")
}

fn sum_where(transactions: &[Transaction], pred: impl Fn(&Transaction) -> bool) -> Result<Decimal> {
    checked_sum(transactions.iter().filter(|t| pred(t)).map(|t| t.amount))
}

/// Sum that reports overflow instead of panicking.
pub(super) fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .context("Amount overflow while totalling the statement")
}
