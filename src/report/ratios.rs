use rust_decimal::Decimal;

use super::statements::{BalanceSheet, IncomeStatement};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// A ratio that may be undefined (zero denominator or overflow).
/// Undefined ratios report as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Ratio(Option<Decimal>);

impl Ratio {
    fn of(numerator: Decimal, denominator: Decimal) -> Self {
        if denominator.is_zero() {
            return Self(None);
        }
        Self(numerator.checked_div(denominator))
    }

    fn percent(numerator: Decimal, denominator: Decimal) -> Self {
        Self(Self::of(numerator, denominator).0.and_then(|r| r.checked_mul(HUNDRED)))
    }

    pub(crate) fn value(&self) -> Decimal {
        self.0.unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn is_defined(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Ratios {
    /// Net profit / revenue, as a percentage.
    pub(crate) net_profit_margin: Ratio,
    /// Liabilities / equity.
    pub(crate) debt_to_equity: Ratio,
    /// Equity / assets, as a percentage.
    pub(crate) equity_ratio: Ratio,
}

impl Ratios {
    pub(crate) fn compute(income: &IncomeStatement, balance: &BalanceSheet) -> Self {
        Self {
            net_profit_margin: Ratio::percent(income.net_profit, income.revenue),
            debt_to_equity: Ratio::of(balance.liabilities, balance.equity),
            equity_ratio: Ratio::percent(balance.equity, balance.assets),
        }
    }

    /// Label and ratio pairs in display order.
    pub(crate) fn rows(&self) -> [(&'static str, Ratio); 3] {
        [
            ("Net Profit Margin (%)", self.net_profit_margin),
            ("Debt-to-Equity", self.debt_to_equity),
            ("Equity Ratio (%)", self.equity_ratio),
        ]
    }
}
