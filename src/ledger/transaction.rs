use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds to or draws from the balance.
///
/// The serialized names (`income`/`expenses`) are the on-disk format and
/// must not change without a data migration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expenses")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expenses",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "income" => Ok(TransactionKind::Income),
            "expenses" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::InvalidType(other.to_string())),
        }
    }
}

/// A single recorded money movement. Immutable once created.
///
/// Field order matches the persisted record layout
/// (`amount`, `category`, `type`, `date`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        amount: Decimal,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
            date,
        }
    }

    /// Month grouping key in `YYYY-MM` form.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Parses a `YYYY-MM-DD` calendar date, rejecting any other layout.
pub fn parse_date(value: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| LedgerError::DateParse(format!("`{value}`: {err}")))
}
