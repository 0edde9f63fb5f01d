use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::{LedgerError, Result};
use crate::storage::StorageBackend;

use super::{
    category::CategoryTaxonomy,
    transaction::{Transaction, TransactionKind},
};

/// What happens to an in-memory append when the write-through save fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Keep the appended transaction; memory and storage may diverge until
    /// the next successful save.
    #[default]
    KeepOnFailure,
    /// Pop the appended transaction so memory matches storage.
    RollbackOnFailure,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl MonthTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Append-only transaction ledger with write-through persistence.
///
/// Owns the ordered transaction sequence (insertion order, not date order)
/// and the injected category taxonomy. Every transaction in the sequence
/// had a category valid for its kind at insertion time.
pub struct Ledger {
    taxonomy: CategoryTaxonomy,
    transactions: Vec<Transaction>,
    store: Box<dyn StorageBackend>,
    policy: PersistPolicy,
}

impl Ledger {
    /// Opens a ledger, loading any previously persisted transactions.
    ///
    /// A missing prior state is a valid empty ledger; malformed persisted
    /// data surfaces as a fatal [`LedgerError::Storage`].
    pub fn open(taxonomy: CategoryTaxonomy, store: Box<dyn StorageBackend>) -> Result<Self> {
        Self::open_with(taxonomy, store, PersistPolicy::default())
    }

    pub fn open_with(
        taxonomy: CategoryTaxonomy,
        store: Box<dyn StorageBackend>,
        policy: PersistPolicy,
    ) -> Result<Self> {
        let transactions = store.load()?;
        tracing::info!(count = transactions.len(), "ledger loaded");
        Ok(Self {
            taxonomy,
            transactions,
            store,
            policy,
        })
    }

    /// Validates, appends, and synchronously persists a new transaction.
    ///
    /// The date defaults to today (caller-local) when omitted. Amount sign
    /// and magnitude are not validated; negative amounts are accepted as
    /// corrections/refunds. On a failed save the in-memory append is kept
    /// or rolled back according to the [`PersistPolicy`].
    pub fn add_transaction(
        &mut self,
        amount: Decimal,
        category: &str,
        kind: TransactionKind,
        date: Option<NaiveDate>,
    ) -> Result<Transaction> {
        if !self.taxonomy.allows(kind, category) {
            return Err(LedgerError::InvalidCategory {
                category: category.to_string(),
                kind,
            });
        }
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let transaction = Transaction::new(amount, category, kind, date);
        self.transactions.push(transaction.clone());
        if let Err(err) = self.store.save(&self.transactions) {
            if self.policy == PersistPolicy::RollbackOnFailure {
                self.transactions.pop();
            }
            return Err(err);
        }
        tracing::debug!(%kind, category, "transaction recorded");
        Ok(transaction)
    }

    /// Total income minus total expenses; zero for an empty ledger.
    pub fn balance(&self) -> Decimal {
        self.transactions
            .iter()
            .map(|txn| match txn.kind {
                TransactionKind::Income => txn.amount,
                TransactionKind::Expense => -txn.amount,
            })
            .sum()
    }

    /// Expense totals keyed by category, sorted by category name.
    ///
    /// Categories without expense transactions are absent, not zero.
    pub fn expense_report(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for txn in &self.transactions {
            if txn.kind == TransactionKind::Expense {
                *totals.entry(txn.category.clone()).or_insert(Decimal::ZERO) += txn.amount;
            }
        }
        totals
    }

    /// Per-month income and expense totals keyed by `YYYY-MM`, sorted by
    /// month. A month appears iff at least one transaction falls in it.
    pub fn monthly_summary(&self) -> BTreeMap<String, MonthTotals> {
        let mut months: BTreeMap<String, MonthTotals> = BTreeMap::new();
        for txn in &self.transactions {
            let entry = months.entry(txn.month_key()).or_default();
            match txn.kind {
                TransactionKind::Income => entry.income += txn.amount,
                TransactionKind::Expense => entry.expenses += txn.amount,
            }
        }
        months
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }
}
