use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

static DEFAULT_TAXONOMY: Lazy<CategoryTaxonomy> = Lazy::new(|| {
    CategoryTaxonomy::new(
        ["Salary", "Freelance", "Investments"],
        [
            "Food",
            "Transportation",
            "Rent",
            "Utilities",
            "Entertainment",
            "Shopping",
        ],
    )
});

/// Fixed set of allowed category names per transaction kind.
///
/// Immutable after construction; there is no add/remove API. The taxonomy
/// is injected into the ledger at construction so tests can substitute
/// alternate category sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    income: Vec<String>,
    expenses: Vec<String>,
}

impl CategoryTaxonomy {
    pub fn new(
        income: impl IntoIterator<Item = impl Into<String>>,
        expenses: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            income: income.into_iter().map(Into::into).collect(),
            expenses: expenses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows(&self, kind: TransactionKind, category: &str) -> bool {
        self.categories(kind).iter().any(|name| name == category)
    }

    pub fn categories(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expenses,
        }
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        DEFAULT_TAXONOMY.clone()
    }
}
