use rust_decimal::Decimal;

use crate::models::Category;

/// A keyword rule: any of `keywords` appearing in the lowercased
/// description assigns `category`.
#[derive(Debug)]
pub(crate) struct KeywordRule {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) category: Category,
}

impl KeywordRule {
    fn matches(&self, desc_lower: &str) -> bool {
        self.keywords.iter().any(|k| desc_lower.contains(k))
    }
}

// Order matters: the first matching rule wins.
static RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["shell", "fuel"],
        category: Category::FuelExpense,
    },
    KeywordRule {
        keywords: &["salary", "payroll"],
        category: Category::PayrollExpense,
    },
    KeywordRule {
        keywords: &["rent"],
        category: Category::RentExpense,
    },
    KeywordRule {
        keywords: &["tax", "vat"],
        category: Category::Tax,
    },
];

/// The keyword rules in priority order.
pub(crate) fn rules() -> &'static [KeywordRule] {
    RULES
}

/// Assign a category from the description keywords, falling back to the
/// sign of the amount when nothing matches.
pub(crate) fn categorize(description: &str, amount: Decimal) -> Category {
    let desc_lower = description.to_lowercase();

    if let Some(rule) = RULES.iter().find(|r| r.matches(&desc_lower)) {
        return rule.category;
    }

    fallback_category(amount)
}

/// Category for a transaction no keyword rule claims.
pub(crate) fn fallback_category(amount: Decimal) -> Category {
    if amount > Decimal::ZERO {
        Category::SalesIncome
    } else {
        Category::OtherExpense
    }
}

#[cfg(test)]
mod tests;
