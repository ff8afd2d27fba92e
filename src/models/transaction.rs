use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// `None` when the statement row left the date blank. Such rows still
    /// count toward every total.
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Transaction {
    /// Build a transaction and assign its category from the keyword rules.
    pub fn new(date: impl Into<Option<NaiveDate>>, description: String, amount: Decimal) -> Self {
        let date = date.into();
        let category = crate::categorize::categorize(&description, amount);
        Self {
            date,
            description,
            amount,
            category,
        }
    }

    /// ISO date, or an empty string for undated rows.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
