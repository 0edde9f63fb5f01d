//! Ledger domain model: transactions, the category taxonomy, and derived
//! queries.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::CategoryTaxonomy;
pub use ledger::{Ledger, MonthTotals, PersistPolicy};
pub use transaction::{parse_date, Transaction, TransactionKind};
