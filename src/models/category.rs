#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FuelExpense,
    PayrollExpense,
    RentExpense,
    Tax,
    SalesIncome,
    OtherExpense,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FuelExpense => "Fuel Expense",
            Self::PayrollExpense => "Payroll Expense",
            Self::RentExpense => "Rent Expense",
            Self::Tax => "Tax",
            Self::SalesIncome => "Sales Income",
            Self::OtherExpense => "Other Expense",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::FuelExpense,
            Self::PayrollExpense,
            Self::RentExpense,
            Self::Tax,
            Self::SalesIncome,
            Self::OtherExpense,
        ]
    }

    /// Expense categories are the ones whose label carries "Expense".
    /// Tax is deliberately not among them.
    pub fn is_expense(&self) -> bool {
        self.as_str().contains("Expense")
    }

    pub fn is_income(&self) -> bool {
        *self == Self::SalesIncome
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
