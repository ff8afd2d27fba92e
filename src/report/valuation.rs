use anyhow::{Context, Result};
use rust_decimal::Decimal;

use super::statements::IncomeStatement;

const DCF_MULTIPLE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const EBITDA_MULTIPLE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const REVENUE_MULTIPLE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Flat-multiple enterprise value proxies. No discounting, no market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Valuation {
    pub(crate) dcf_proxy: Decimal,
    pub(crate) ev_ebitda_proxy: Decimal,
    pub(crate) revenue_multiple: Decimal,
}

impl Valuation {
    pub(crate) fn estimate(income: &IncomeStatement) -> Result<Self> {
        let scale = |value: Decimal, multiple: Decimal, label: &str| {
            value
                .checked_mul(multiple)
                .with_context(|| format!("Amount overflow in {label}"))
        };
        Ok(Self {
            dcf_proxy: scale(income.net_profit, DCF_MULTIPLE, "DCF EV")?,
            ev_ebitda_proxy: scale(income.net_profit, EBITDA_MULTIPLE, "EV/EBITDA EV")?,
            revenue_multiple: scale(income.revenue, REVENUE_MULTIPLE, "Revenue Multiple EV")?,
        })
    }
}
