//! Statement derivation: the figures every presenter shows.
//!
//! Everything here is a pure function of the loaded transactions. A
//! [`Report`] is built once per load and never updated in place.

mod format;
mod ratios;
mod series;
mod statements;
mod valuation;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Category, Transaction};

pub(crate) use format::format_amount;
pub(crate) use ratios::{Ratio, Ratios};
pub(crate) use series::{expense_by_category, running_balance};
pub(crate) use statements::{BalanceSheet, IncomeStatement};
pub(crate) use valuation::Valuation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Report {
    pub(crate) income: IncomeStatement,
    pub(crate) balance: BalanceSheet,
    pub(crate) ratios: Ratios,
    pub(crate) valuation: Valuation,
    pub(crate) expenses_by_category: Vec<(Category, Decimal)>,
    pub(crate) balance_by_date: Vec<(NaiveDate, Decimal)>,
}

impl Report {
    /// Fails only when the amounts are too large for exact decimal totals.
    pub(crate) fn build(transactions: &[Transaction]) -> Result<Self> {
        let income = IncomeStatement::from_transactions(transactions)?;
        let balance = BalanceSheet::from_transactions(transactions)?;
        let ratios = Ratios::compute(&income, &balance);
        let valuation = Valuation::estimate(&income)?;

        tracing::debug!(
            rows = transactions.len(),
            revenue = %income.revenue,
            net_profit = %income.net_profit,
            equity = %balance.equity,
            "built report"
        );

        Ok(Self {
            income,
            balance,
            ratios,
            valuation,
            expenses_by_category: expense_by_category(transactions)?,
            balance_by_date: running_balance(transactions)?,
        })
    }

    /// The six statement figures as (metric, value), in report order.
    pub(crate) fn statement_rows(&self) -> [(&'static str, Decimal); 6] {
        [
            ("Revenue", self.income.revenue),
            ("Expenses", self.income.expenses),
            ("Net Profit", self.income.net_profit),
            ("Assets", self.balance.assets),
            ("Liabilities", self.balance.liabilities),
            ("Equity", self.balance.equity),
        ]
    }

    /// The three enterprise value proxies as (label, value).
    pub(crate) fn valuation_rows(&self) -> [(&'static str, Decimal); 3] {
        [
            ("DCF EV", self.valuation.dcf_proxy),
            ("EV/EBITDA EV", self.valuation.ev_ebitda_proxy),
            ("Revenue Multiple EV", self.valuation.revenue_multiple),
        ]
    }
}
